//! Blog search: full-text search over post titles with author facets.
//!
//! Run with: `cargo run --example blog_search`

use lumen::{Document, Engine, FacetRequest, FieldMapping, ReturnFields, SearchRequest};

fn main() -> lumen::Result<()> {
    println!("=== Lumen blog search ===\n");

    let mapping = FieldMapping::builder()
        .add_text_field("Title")
        .add_text_field("Body")
        .add_keyword_field("Author")
        .build()?;
    let engine = Engine::new(mapping);

    let outcome = engine.index_batch(vec![
        Document::new("a")
            .add_field("Title", "Hello World")
            .add_field("Body", "My first post on this blog.")
            .add_field("Author", "Sangeet Kumar"),
        Document::new("b")
            .add_field("Title", "Hello World Again")
            .add_field("Body", "Picking the blog back up after a long break.")
            .add_field("Author", "Mayan Sangeet"),
        Document::new("c")
            .add_field("Title", "Hello World Again 2")
            .add_field("Body", "Notes on writing a search engine.")
            .add_field("Author", "Mayan Sangeet"),
    ]);
    println!("Indexed {} documents.\n", outcome.indexed);

    for query in ["hello", "blog", "search engine", "nonexistentterm"] {
        let request = SearchRequest::builder(query)
            .fields(ReturnFields::names(["Title", "Author"]))
            .add_facet("authors", FacetRequest::new("Author", 10))
            .build();
        let result = engine.search(&request)?;

        println!("[Search] '{query}': {} hits", result.total);
        println!("{}\n", serde_json::to_string_pretty(&result)?);
    }

    Ok(())
}
