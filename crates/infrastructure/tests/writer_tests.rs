use infrastructure::PrgFileWriter;
use std::fs;

#[test]
fn test_write_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("main").join("prg.lua");

    let writer = PrgFileWriter::new(&path);
    writer.write("return prg").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "return prg");
}

#[test]
fn test_write_overwrites_previous_document() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prg.lua");
    fs::write(&path, "-- stale document that is longer than the new one").unwrap();

    PrgFileWriter::new(&path).write("return prg").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "return prg");
}
