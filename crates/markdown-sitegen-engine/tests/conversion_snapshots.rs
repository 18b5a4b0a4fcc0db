use pretty_assertions::assert_eq;

use markdown_sitegen_engine::{
    InlineSpan, MarkdownError, ParseOptions, QuoteStyle, markdown_to_html, parse_document_with,
    parse_inline,
};

#[test]
fn bold_word_spans() {
    let spans = parse_inline("This is text with a **bolded** word").unwrap();
    assert_eq!(
        spans,
        vec![
            InlineSpan::Plain("This is text with a ".into()),
            InlineSpan::Bold("bolded".into()),
            InlineSpan::Plain(" word".into()),
        ]
    );
}

#[test]
fn title_and_paragraph() {
    let html = markdown_to_html("# Title\n\nA paragraph.").unwrap();
    insta::assert_snapshot!(html, @"<div><h1>Title</h1><p>A paragraph.</p></div>");
}

#[test]
fn image_only_paragraph() {
    let html = markdown_to_html("![alt](http://x/y.png)").unwrap();
    insta::assert_snapshot!(html, @r#"<div><p><img src="http://x/y.png" alt="alt"></p></div>"#);
}

#[test]
fn every_block_kind() {
    let md = "\
# Tolkien Fan Club

**I like Tolkien**. Read my [first post here](/majesty)

> All that is gold does not glitter

## Reasons I like Tolkien

* You can spend years studying the legendarium
* It can be enjoyed by children and adults alike

1. Gandalf
2. Bilbo
3. Sam

```
func main(){
    fmt.Println(\"Hello, World!\")
}
```

![JRR Tolkien sitting](/images/tolkien.png)
";
    let html = markdown_to_html(md).unwrap();
    assert_eq!(
        html,
        concat!(
            "<div>",
            "<h1>Tolkien Fan Club</h1>",
            r#"<p><b>I like Tolkien</b>. Read my <a href="/majesty">first post here</a></p>"#,
            "<blockquote>All that is gold does not glitter</blockquote>",
            "<h2>Reasons I like Tolkien</h2>",
            "<ul><li>You can spend years studying the legendarium</li>",
            "<li>It can be enjoyed by children and adults alike</li></ul>",
            "<ol><li>Gandalf</li><li>Bilbo</li><li>Sam</li></ol>",
            "<pre><code>func main(){\n    fmt.Println(\"Hello, World!\")\n}</code></pre>",
            r#"<p><img src="/images/tolkien.png" alt="JRR Tolkien sitting"></p>"#,
            "</div>",
        )
    );
}

#[test]
fn boundary_blocks_are_paragraphs() {
    let html = markdown_to_html("1. a\n3. b\n\n####### not a heading").unwrap();
    assert_eq!(html, "<div><p>1. a\n3. b</p><p>####### not a heading</p></div>");
}

#[test]
fn multi_line_quote_styles() {
    let md = "> first\n> second";

    let default = markdown_to_html(md).unwrap();
    assert_eq!(default, "<div><blockquote>first\n> second</blockquote></div>");

    let per_line = ParseOptions {
        quote_style: QuoteStyle::PerLine,
    };
    let html = parse_document_with(md, &per_line).unwrap().to_html();
    assert_eq!(html, "<div><blockquote>first\nsecond</blockquote></div>");
}

#[test]
fn empty_document() {
    insta::assert_snapshot!(markdown_to_html("").unwrap(), @"<div></div>");
}

#[test]
fn malformed_inline_fails_whole_document() {
    assert_eq!(
        markdown_to_html("# ok\n\n**unclosed"),
        Err(MarkdownError::UnterminatedDelimiter("**"))
    );
}
