pub mod atmo;
