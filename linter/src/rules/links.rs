use std::collections::HashSet;
use std::path::Path;

use rulefile::RuleFile;

use crate::diagnostic::Diagnostic;
use crate::rules::{Check, CheckContext};

/// Internal links must resolve: `#fragment` links against a section anchor
/// in the same document, relative paths against the filesystem. Links with
/// a URL scheme are out of scope for a structural check and are skipped.
pub struct InternalLinks;

impl Check for InternalLinks {
    fn name(&self) -> &'static str {
        "internal-links"
    }

    fn run(&self, file: &RuleFile, ctx: &CheckContext<'_>, out: &mut Vec<Diagnostic>) {
        let anchors: HashSet<String> = file
            .sections
            .iter()
            .map(|s| slugify(&s.title))
            .collect();
        let doc_dir = ctx.path.parent().unwrap_or_else(|| Path::new("."));

        for body in file.bodies() {
            for link in &body.links {
                let dest = link.dest.as_str();
                if dest.is_empty() || is_external(dest) {
                    continue;
                }

                if let Some(fragment) = dest.strip_prefix('#') {
                    if !anchors.contains(&fragment.to_ascii_lowercase()) {
                        out.push(
                            Diagnostic::error(
                                ctx.path,
                                self.name(),
                                format!("link points to missing section anchor '#{fragment}'"),
                            )
                            .with_span(link.span.clone()),
                        );
                    }
                    continue;
                }

                // Relative path, possibly with its own fragment. Only the
                // file part is checked; anchors in other documents are not
                // resolved.
                let path_part = dest.split('#').next().unwrap_or(dest);
                if path_part.is_empty() || Path::new(path_part).is_absolute() {
                    continue;
                }
                if !doc_dir.join(path_part).exists() {
                    out.push(
                        Diagnostic::error(
                            ctx.path,
                            self.name(),
                            format!("link target does not exist: '{path_part}'"),
                        )
                        .with_span(link.span.clone()),
                    );
                }
            }
        }
    }
}

fn is_external(dest: &str) -> bool {
    dest.contains("://") || dest.starts_with("mailto:")
}

/// GitHub-style heading anchor: lowercase, spaces become hyphens, other
/// punctuation is dropped.
fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
        } else if c == ' ' {
            slug.push('-');
        } else if c == '-' || c == '_' {
            slug.push(c);
        }
    }
    slug
}
