pub mod nls;
pub mod theme;

pub use nls::NlsConfiguration;
pub use theme::ColorThemeData;
