// =============================================================================
// NexusCorp Web - Browser Services
// =============================================================================

pub mod notices;

pub use notices::NoticeService;
