//! Router template rendering.
//!
//! Generated source is assembled by rendering a Handlebars template whose
//! named slots receive text fragments from the emitters. Escaping is turned
//! off: slot values are source code and are inserted verbatim.
//!
//! | Tag                          | Meaning                                  |
//! |------------------------------|------------------------------------------|
//! | `{{name}}`                   | slot value, verbatim                     |
//! | `{{#if name}}…{{/if}}`       | body rendered if the slot is non-empty   |
//! | `{{#unless name}}…{{/unless}}` | body rendered if the slot is missing or empty |
//! | `{{! comment}}`              | dropped                                  |
//!
//! A slot that was never set renders as empty text.

mod router;
mod slots;
mod template;

pub use handlebars::{RenderError, TemplateError};
pub use router::ROUTER_TEMPLATE;
pub use slots::Slots;
pub use template::Template;
