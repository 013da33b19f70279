//! Templates compiled into the showcase binary
//!
//! Set `templates.template_dir` to serve edited copies from disk instead.

use chirp_ui::template::EmbeddedTemplates;

/// Every showcase template, keyed by name
pub const TEMPLATES: EmbeddedTemplates = &[
    ("base.html", include_str!("../templates/base.html")),
    ("index.html", include_str!("../templates/index.html")),
    ("data.html", include_str!("../templates/data.html")),
    ("_table.html", include_str!("../templates/_table.html")),
    ("_bulk_bar.html", include_str!("../templates/_bulk_bar.html")),
    ("forms.html", include_str!("../templates/forms.html")),
    ("_form_demo.html", include_str!("../templates/_form_demo.html")),
    ("_toast.html", include_str!("../templates/_toast.html")),
    ("ui.html", include_str!("../templates/ui.html")),
    ("_tab.html", include_str!("../templates/_tab.html")),
    ("calendar.html", include_str!("../templates/calendar.html")),
];
