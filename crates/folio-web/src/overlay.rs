//! DOM section visibility and the skill detail panel.

use folio_core::{OverlayFlags, SkillInfo};
use web_sys as web;

use crate::constants::LOADING_OVERLAY_ID;
use crate::dom;

const SECTIONS: [&str; 5] = [
    "section-intro",
    "section-profile",
    "section-skills",
    "section-projects",
    "section-guestbook",
];

/// Push the derived flags onto the section elements. Opacity transitions
/// come from the stylesheet; we only flip the data attribute and gate
/// pointer events while a section is hidden.
pub fn apply(document: &web::Document, flags: OverlayFlags) {
    let visible = [
        flags.intro,
        flags.profile,
        flags.skills,
        flags.projects,
        flags.guestbook,
    ];
    for (id, show) in SECTIONS.iter().zip(visible) {
        if let Some(el) = document.get_element_by_id(id) {
            let _ = el.set_attribute("data-visible", if show { "1" } else { "0" });
            let _ = el.set_attribute(
                "style",
                if show {
                    "opacity:1"
                } else {
                    "opacity:0;pointer-events:none"
                },
            );
        }
    }
}

pub fn hide_loading(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LOADING_OVERLAY_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Fill or clear the skill detail panel next to the keycap grid.
pub fn show_skill_detail(document: &web::Document, skill: Option<&SkillInfo>) {
    match skill {
        Some(s) => {
            if let Some(el) = document.get_element_by_id("skill-panel") {
                let _ = el.set_attribute("data-active", "1");
            }
            dom::set_text(document, "skill-name", s.name);
            dom::set_text(document, "skill-blurb", s.blurb);
            if let Some(el) = document.get_element_by_id("skill-accent") {
                let _ = el.set_attribute(
                    "style",
                    &format!(
                        "background-color:rgb({},{},{})",
                        (s.color_rgb[0] * 255.0) as u8,
                        (s.color_rgb[1] * 255.0) as u8,
                        (s.color_rgb[2] * 255.0) as u8
                    ),
                );
            }
        }
        None => {
            if let Some(el) = document.get_element_by_id("skill-panel") {
                let _ = el.set_attribute("data-active", "0");
            }
        }
    }
}
