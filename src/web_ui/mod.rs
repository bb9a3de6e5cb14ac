mod router;

pub use router::create_web_ui_router;
