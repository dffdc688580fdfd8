/// Write-only channel for non-fatal warnings raised while exporting.
///
/// Sinks never push back: a message is accepted or dropped, and the caller
/// carries on either way.
pub trait DiagnosticSink {
    fn add_message(&mut self, message: &str);
}

/// Collecting sink handed back to callers alongside a rendered document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    messages: Vec<String>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn into_messages(self) -> Vec<String> {
        self.messages
    }
}

impl DiagnosticSink for Diagnostics {
    fn add_message(&mut self, message: &str) {
        self.messages.push(message.to_string());
    }
}

impl DiagnosticSink for Vec<String> {
    fn add_message(&mut self, message: &str) {
        self.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_keep_arrival_order() {
        let mut diagnostics = Diagnostics::new();
        diagnostics.add_message("first");
        diagnostics.add_message("second");

        assert_eq!(diagnostics.len(), 2);
        assert_eq!(diagnostics.messages(), ["first", "second"]);
    }

    #[test]
    fn test_vec_is_a_sink() {
        let mut sink: Vec<String> = Vec::new();
        sink.add_message("warning");
        assert_eq!(sink, vec!["warning".to_string()]);
    }
}
