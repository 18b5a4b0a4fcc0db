//! Document-level tests for the parsing module.

use pretty_assertions::assert_eq;

use super::*;
use crate::parsing::blocks::BlockKind;
use crate::parsing::inline::{InlineSpan, parse_inline};

fn div(children: Vec<HtmlNode>) -> HtmlNode {
    HtmlNode::parent("div", children)
}

fn inline(text: &str) -> Vec<HtmlNode> {
    parse_inline(text)
        .unwrap()
        .into_iter()
        .map(InlineSpan::into_element)
        .collect()
}

#[test]
fn markdown_to_html_node() {
    let cases = vec![
        ("# Heading", div(vec![HtmlNode::parent("h1", inline("Heading"))])),
        (
            "### Another Heading",
            div(vec![HtmlNode::parent("h3", inline("Another Heading"))]),
        ),
        (
            "```\nprint('Hello World')\n```",
            div(vec![HtmlNode::parent(
                "pre",
                vec![HtmlNode::leaf("code", "print('Hello World')")],
            )]),
        ),
        (
            "* Item A\n* Item B",
            div(vec![HtmlNode::parent(
                "ul",
                vec![
                    HtmlNode::parent("li", inline("Item A")),
                    HtmlNode::parent("li", inline("Item B")),
                ],
            )]),
        ),
        (
            "This is a simple paragraph.",
            div(vec![HtmlNode::parent("p", inline("This is a simple paragraph."))]),
        ),
        ("", div(vec![])),
    ];

    for (i, (input, expected)) in cases.into_iter().enumerate() {
        assert_eq!(
            parse_document(input).unwrap(),
            expected,
            "case {} failed: {input:?}",
            i + 1
        );
    }
}

#[test]
fn title_and_paragraph() {
    let tree = parse_document("# Title\n\nA paragraph.").unwrap();
    assert_eq!(
        tree,
        div(vec![
            HtmlNode::parent("h1", vec![HtmlNode::text("Title")]),
            HtmlNode::parent("p", vec![HtmlNode::text("A paragraph.")]),
        ])
    );
    assert_eq!(tree.to_html(), "<div><h1>Title</h1><p>A paragraph.</p></div>");
}

#[test]
fn serialization_is_deterministic() {
    let md = "# A\n\n- **b**\n- [c](d)\n\n> e\n\n1. f\n2. ![g](h)";
    assert_eq!(markdown_to_html(md), markdown_to_html(md));
}

#[test]
fn unclosed_bold_fails_the_document() {
    assert_eq!(
        parse_document("# Fine\n\n**unclosed"),
        Err(MarkdownError::UnterminatedDelimiter("**"))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        MarkdownError::UnterminatedDelimiter("**").to_string(),
        "Invalid markdown: `**` delimiter is not closed"
    );
    let err = MarkdownError::UnterminatedMedia {
        kind: Media::Link,
        markup: "[a](b)".into(),
    };
    assert_eq!(err.to_string(), "Invalid markdown: link section not closed: [a](b)");
}

#[test]
fn block_kinds_in_document_order() {
    let kinds: Vec<BlockKind> = parse_blocks("# h\n\n```\nx\n```\n\n> q\n\n- u\n\n1. o\n\np")
        .into_iter()
        .map(|b| b.kind)
        .collect();
    assert_eq!(
        kinds,
        vec![
            BlockKind::Heading { level: 1 },
            BlockKind::Code,
            BlockKind::Quote,
            BlockKind::UnorderedList,
            BlockKind::OrderedList,
            BlockKind::Paragraph,
        ]
    );
}

#[test]
fn per_line_quotes_through_options() {
    let options = ParseOptions {
        quote_style: QuoteStyle::PerLine,
    };
    let tree = parse_document_with("> a\n> b", &options).unwrap();
    assert_eq!(tree.to_html(), "<div><blockquote>a\nb</blockquote></div>");
}

#[test]
fn whitespace_only_block_is_an_empty_paragraph() {
    assert_eq!(
        markdown_to_html("a\n\n \n\nb").unwrap(),
        "<div><p>a</p><p></p><p>b</p></div>"
    );
    assert_eq!(
        markdown_to_html("a\n\n\n\n\n").unwrap(),
        "<div><p>a</p><p></p></div>"
    );
}
