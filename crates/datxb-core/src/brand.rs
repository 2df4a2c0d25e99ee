//! Fixed product identity shown across screens.

pub const PRODUCT_NAME: &str = "datXB";
pub const TAGLINE: &str = "Professional Data Management Platform";
pub const SITE_URL: &str = "https://data-x-tawny.vercel.app/";
/// Site host without scheme, used in headers.
pub const SITE_HOST: &str = "data-x-tawny.vercel.app";
/// Administrator contact; receives (simulated) approval requests.
pub const ADMIN_EMAIL: &str = "raviraushan1313@gmail.com";
