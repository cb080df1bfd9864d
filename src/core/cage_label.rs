//! Printable cage labels

use rust_embed::Embed;
use serde::Serialize;
use tera::Tera;

use crate::core::error::WorkshopError;
use crate::core::labels::humanize;
use crate::entities::Cage;

#[derive(Embed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

const LABEL_TEMPLATE: &str = "cage_label.txt.tera";

/// Inner width of the boxed header
const LABEL_WIDTH: usize = 28;

/// Everything printed on a cage label
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CageLabel {
    pub number: String,
    pub location: String,
    /// Status with underscores shown as spaces
    pub status: String,
    /// Leading words of the assigned project's name
    pub project: Option<String>,
    pub project_id: Option<String>,
    pub parts_count: u32,
}

impl CageLabel {
    pub fn new(cage: &Cage, name_words: usize) -> Self {
        let assignment = cage.assignment();
        Self {
            number: cage.number.clone(),
            location: cage.location.clone(),
            status: humanize(cage.status.as_str()),
            project: assignment.map(|_| cage.short_project_name(name_words)),
            project_id: assignment.map(|a| a.project_id.to_string()),
            parts_count: cage.parts_count,
        }
    }
}

fn center(text: &str, width: usize) -> String {
    let len = text.chars().count();
    if len >= width {
        return text.to_string();
    }
    let left = (width - len) / 2;
    let right = width - len - left;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(right))
}

/// Renders labels from the embedded template
pub struct LabelRenderer {
    tera: Tera,
}

impl LabelRenderer {
    pub fn new() -> Result<Self, WorkshopError> {
        let mut tera = Tera::default();
        for name in EmbeddedTemplates::iter() {
            if let Some(file) = EmbeddedTemplates::get(&name) {
                let source = String::from_utf8_lossy(file.data.as_ref());
                tera.add_raw_template(&name, &source)?;
            }
        }
        Ok(Self { tera })
    }

    pub fn render(&self, label: &CageLabel) -> Result<String, WorkshopError> {
        let width = LABEL_WIDTH.max(label.number.len()).max(label.location.len());

        let mut context = tera::Context::new();
        context.insert("rule", &"-".repeat(width));
        context.insert("number_line", &center(&label.number, width));
        context.insert("location_line", &center(&label.location, width));
        context.insert("status", &label.status);
        context.insert("project", &label.project);
        context.insert("project_id", &label.project_id);
        context.insert("parts_count", &label.parts_count);

        Ok(self.tera.render(LABEL_TEMPLATE, &context)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::Workshop;
    use crate::entities::CageStatus;

    #[test]
    fn test_label_uses_leading_project_words() {
        let workshop = Workshop::builtin().unwrap();
        let label = CageLabel::new(workshop.cage("C-012").unwrap(), 2);
        assert_eq!(label.project.as_deref(), Some("1969 Mustang"));
        assert_eq!(label.project_id.as_deref(), Some("proj-001"));
        assert_eq!(label.parts_count, 56);
        assert_eq!(label.status, "active");
    }

    #[test]
    fn test_unassigned_cage_has_no_project() {
        let workshop = Workshop::builtin().unwrap();
        let label = CageLabel::new(workshop.cage("C-025").unwrap(), 2);
        assert_eq!(label.project, None);
        assert_eq!(label.status, "empty");

        let text = LabelRenderer::new().unwrap().render(&label).unwrap();
        assert!(!text.contains("Project"));
        assert!(text.contains("Parts Count  0"));
    }

    #[test]
    fn test_pending_pickup_status_is_humanized() {
        let workshop = Workshop::builtin().unwrap();
        let mut cage = workshop.cage("C-015").unwrap().clone();
        cage.status = CageStatus::PendingPickup;
        assert_eq!(CageLabel::new(&cage, 2).status, "pending pickup");
    }

    #[test]
    fn test_rendered_label() {
        let workshop = Workshop::builtin().unwrap();
        let label = CageLabel::new(workshop.cage("C-008").unwrap(), 2);
        let text = LabelRenderer::new().unwrap().render(&label).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("+{}+", "-".repeat(28)));
        assert_eq!(lines[1].trim_matches('|').trim(), "C-008");
        assert_eq!(lines[2].trim_matches('|').trim(), "Row B, Bay 3");
        assert_eq!(lines[4], "  Status       active");
        assert_eq!(lines[5], "  Project      1970 Chevelle (proj-002)");
        assert_eq!(lines[6], "  Parts Count  45");
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab  ");
        assert_eq!(center("abc", 6), " abc  ");
        assert_eq!(center("toolong", 3), "toolong");
    }
}
