use indoc::indoc;

use crate::sink::{ByteSink, SourceSink, TableSink};

#[test]
fn byte_sink_ignores_text() {
    let mut sink = ByteSink::new();

    sink.write_line("header");
    sink.indent();
    sink.write_byte(7);
    sink.write_comment_line("seven");
    sink.unindent();

    assert_eq!(sink.into_bytes(), [7]);
}

#[test]
fn compressed_u32() {
    let mut sink = ByteSink::new();

    sink.write_compressed_u32(0x7F);
    sink.write_compressed_u32(0x80);
    sink.write_compressed_u32(u32::MAX);

    assert_eq!(
        sink.bytes(),
        [0x7F, 0x80, 0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0x0F]
    );
}

#[test]
fn source_sink_layout() {
    let mut sink = SourceSink::new();

    sink.write_line("&[");
    sink.indent();
    sink.write_comment_line("first");
    sink.write_byte(0x01);
    sink.write_byte(0xAB);
    sink.write_comment_line("two bytes");
    sink.write_line("");
    sink.write_compressed_u32(300);
    sink.write_comment_line("300");
    sink.unindent();
    sink.write_line("]");

    assert_eq!(sink.len(), 4);
    assert_eq!(
        sink.finish(),
        indoc! {"
            &[
                // first
                0x01, 0xAB, // two bytes

                0xAC, 0x02, // 300
            ]
        "}
    );
}

#[test]
fn uncommented_bytes_are_flushed() {
    let mut sink = SourceSink::new();
    assert!(sink.is_empty());

    sink.write_byte(0);
    sink.write_byte(1);

    assert_eq!(sink.finish(), "0x00, 0x01,\n");
}

#[test]
#[should_panic(expected = "unbalanced unindent")]
fn unbalanced_unindent() {
    SourceSink::new().unindent();
}

#[test]
fn comments_escape_control_characters() {
    let mut sink = SourceSink::new();

    sink.write_byte(0);
    sink.write_comment_line("a\nb\tc");

    assert_eq!(sink.finish(), "0x00, // a\\nb\\tc\n");
}
