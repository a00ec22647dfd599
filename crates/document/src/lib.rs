//! The two projections of a finalized quote: the plain-text version used for
//! clipboard copy and mail prefill, and the paginated document built over a
//! pluggable drawing surface.

pub mod backends;
pub mod export;
pub mod layout;
pub mod surface;
pub mod text;

pub use backends::html::HtmlSurface;
pub use backends::recording::{DrawOp, RecordingSurface};
pub use export::{derive_filename, ExportArtifact, ExportError, QuoteExporter};
pub use layout::render_quote_page;
pub use surface::{
    visual_order, DrawSurface, PageSize, TextAlign, TextOrder, TextStyle, TextWeight,
};
pub use text::{
    format_currency, internal_breakdown, register_template_filters, CopyConfirmation, MailPrefill,
    RenderError, TextProjection, COPY_CONFIRMATION_TTL,
};
