use domain::{DiagnosticSink, TechObject};
use tracing::warn;

/// Resolved attachment of one tech object to another. Both sides are
/// 0-based positions in the tech-object collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub owner: usize,
    pub attached: usize,
}

/// Resolve the attachment strings of `objects` into owner/attached pairs.
///
/// Tokens are 1-based object indices separated by whitespace. Malformed and
/// dangling tokens are reported to `sink` and skipped; resolution always
/// runs to the end.
pub fn resolve_bindings(objects: &[TechObject], sink: &mut dyn DiagnosticSink) -> Vec<Binding> {
    let mut bindings = Vec::new();

    for (owner, object) in objects.iter().enumerate() {
        for token in object.attached_objects().split_whitespace() {
            let index = match token.parse::<i64>() {
                Ok(index) => index,
                Err(_) => {
                    let message = format!(
                        "malformed attachment field on object `{} {}`",
                        object.name(),
                        object.tech_number()
                    );
                    warn!(object = %object.name(), token = %token, "⚠️ {}", message);
                    sink.add_message(&message);
                    continue;
                }
            };

            match usize::try_from(index) {
                Ok(position) if (1..=objects.len()).contains(&position) => {
                    bindings.push(Binding {
                        owner,
                        attached: position - 1,
                    });
                }
                _ => {
                    let message = format!(
                        "attached unit `{}` not found for object `{} {}`",
                        index,
                        object.name(),
                        object.tech_number()
                    );
                    warn!(object = %object.name(), index = index, "⚠️ {}", message);
                    sink.add_message(&message);
                }
            }
        }
    }

    bindings
}
