//! Integration tests for the DocumentBuilder API
//!
//! These tests drive the public API the way a parser and a layout stage do.

use msc::{
    DocumentBuilder,
    arc::{ArcEndpoints, ArcType},
    attribute::{AttribType, Attribute},
    config::AppConfig,
    option::OptType,
    resolve::RenderOptions,
};

#[test]
fn test_hello_message_end_to_end() {
    let document = DocumentBuilder::new()
        .entity("A")
        .entity("B")
        .arc_with_attributes(
            ArcType::Message,
            ArcEndpoints::between("A", "B"),
            1,
            Attribute::new(AttribType::Label, "hello"),
        )
        .build();

    assert_eq!(document.entity_count(), 2);
    assert_eq!(document.arc_count(), 1);

    let arc = document.arcs();
    assert_eq!(arc.source(), Some("A"));
    assert_eq!(arc.dest(), Some("B"));
    assert_eq!(arc.kind(), Some(ArcType::Message));
    assert_eq!(arc.attribute(AttribType::Label), Some("hello"));

    let teardown = document.destroy();
    assert_eq!(teardown.total(), 5);
}

#[test]
fn test_layout_style_walk() {
    let document = DocumentBuilder::new()
        .option(OptType::HScale, "2")
        .entity("client")
        .entity_with_attributes("server", Attribute::new(AttribType::Label, "Server"))
        .arc(ArcType::Method, ArcEndpoints::between("client", "server"), 2)
        .parallel(3)
        .arc(ArcType::Method, ArcEndpoints::looped("server"), 3)
        .arc(ArcType::Discontinuity, ArcEndpoints::None, 4)
        .arc(ArcType::Return, ArcEndpoints::between("server", "client"), 5)
        .build();

    let options = RenderOptions::resolve(&document, AppConfig::default().defaults())
        .expect("options should resolve");
    assert_eq!(options.hscale(), 2.0);

    let mut columns = Vec::new();
    let mut entity = document.entities();
    while !entity.at_end() {
        columns.push(entity.attribute(AttribType::Label).unwrap_or_default());
        entity.advance();
    }
    assert_eq!(columns, ["client", "Server"]);

    let mut rows = Vec::new();
    let mut arc = document.arcs();
    while !arc.at_end() {
        let src = arc.source().and_then(|label| document.entity_index(label));
        let dst = arc.dest().and_then(|label| document.entity_index(label));
        rows.push((arc.input_line(), src, dst));
        arc.advance();
    }
    assert_eq!(
        rows,
        [
            (Some(2), Some(0), Some(1)),
            (Some(3), None, None),
            (Some(3), Some(1), Some(1)),
            (Some(4), None, None),
            (Some(5), Some(1), Some(0)),
        ]
    );
    assert_eq!(document.parallel_arc_count(), 2);
}

#[test]
fn test_unknown_entity_reference_is_not_validated() {
    let document = DocumentBuilder::new()
        .entity("a")
        .arc(ArcType::Message, ArcEndpoints::between("a", "ghost"), 1)
        .build();

    assert_eq!(document.arcs().dest(), Some("ghost"));
    assert_eq!(document.entity_index("ghost"), None);
}

#[test]
fn test_dump_lists_everything_in_order() {
    let document = DocumentBuilder::new()
        .option(OptType::WordWrapArcs, "true")
        .entity("a")
        .entity("b")
        .arc(ArcType::Message, ArcEndpoints::between("a", "b"), 1)
        .build();

    let mut out = Vec::new();
    document.write_dump(&mut out).expect("writing to a Vec cannot fail");
    let dump = String::from_utf8(out).expect("dump is UTF-8");

    assert_eq!(
        dump,
        "Option list (1 options)\nwordwraparcs=true\n\
         Entity list (2 entities, 0 parallel)\na\nb\n\n\
         Arc list (1 arcs)\n'a' -> 'b'\n"
    );
}
