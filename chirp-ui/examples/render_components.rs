//! Render a few chirp-ui components from the command line
//!
//! Shows the `bem` and `field_errors` filters and a table query wired into a
//! template set.
//!
//! Run with:
//! ```bash
//! cargo run --example render_components
//! ```

use chirp_ui::prelude::*;
use chirp_ui::template::EmbeddedTemplates;
use minijinja::context;
use tracing::info;

const TEMPLATES: EmbeddedTemplates = &[
    (
        "alert.html",
        r#"<div class="{{ 'alert' | bem(variant=variant, cls='demo') }}">{{ message }}</div>"#,
    ),
    (
        "field.html",
        r#"<label class="{{ 'field' | bem(modifier=('error' if errors | field_errors(name) else '')) }}">
  {{ label }}
{% for message in errors | field_errors(name) %}
  <span class="{{ 'field__error' | bem }}">{{ message }}</span>
{% endfor %}
</label>"#,
    ),
    (
        "rows.txt",
        r"{% for row in result.rows %}{{ row.name }} <{{ row.email }}>
{% endfor %}page {{ result.page }} of {{ result.total_pages }}",
    ),
];

fn main() -> anyhow::Result<()> {
    chirp_ui::observability::init()?;

    let templates = TemplateSet::new(TEMPLATES)?;

    info!("Rendering alert");
    println!(
        "{}\n",
        templates.render("alert.html", context! { variant => "success", message => "Saved" })?
    );

    info!("Rendering field with errors");
    let mut errors = FieldErrorMap::new();
    errors.add("email", "Email is required");
    println!(
        "{}\n",
        templates.render(
            "field.html",
            context! { errors => errors, name => "email", label => "Email" },
        )?
    );

    info!("Rendering table page");
    let store = InMemoryRecordStore::new(vec![
        Record::new("Alice", "alice@example.com", "Admin", "success", "2h ago", "◇"),
        Record::new("Bob", "bob@example.com", "User", "warning", "1d ago", "◆"),
        Record::new("Carol", "carol@example.com", "User", "success", "5m ago", "○"),
    ]);
    let spec = TableQuerySpec::new()
        .sort(SortColumn::Name, SortDirection::Desc)
        .page_size(2);
    println!(
        "{}",
        templates.render("rows.txt", context! { result => store.query(&spec) })?
    );

    Ok(())
}
