// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{FileSink, MemorySink, ReportError, ReportSink, WriterSink};

#[test]
fn test_file_sink_writes_named_file() {
    let dir = tempfile::tempdir().unwrap();
    let sink: FileSink = FileSink::new(dir.path());

    sink.write_document("report.json", "{}").unwrap();

    assert_eq!(
        std::fs::read_to_string(dir.path().join("report.json")).unwrap(),
        "{}"
    );
}

#[test]
fn test_file_sink_reports_path_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let sink: FileSink = FileSink::new(dir.path().join("missing"));

    let err: ReportError = sink.write_document("report.json", "{}").unwrap_err();

    match err {
        ReportError::Io { path, .. } => assert!(path.ends_with("missing/report.json")),
        other => panic!("expected Io error, got {other}"),
    }
}

#[test]
fn test_writer_sink_appends_documents() {
    let sink: WriterSink<Vec<u8>> = WriterSink::new(Vec::new());

    sink.write_document("a.json", "{\"a\":1}").unwrap();
    sink.write_document("b.json", "{\"b\":2}").unwrap();

    let written: String = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(written, "{\"a\":1}\n{\"b\":2}\n");
}

#[test]
fn test_memory_sink_replaces_same_name() {
    let sink: MemorySink = MemorySink::new();

    sink.write_document("a.json", "first").unwrap();
    sink.write_document("a.json", "second").unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(sink.get("a.json").as_deref(), Some("second"));
}
