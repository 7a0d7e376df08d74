// Built on every target so tests can check it against the native backend.
#[allow(dead_code)]
pub(crate) mod fallback;

cfg_if::cfg_if! {
    if #[cfg(feature = "portable")] {
        pub use fallback::*;
    } else if #[cfg(target_arch = "x86_64")] {
        mod x86_64;
        pub use x86_64::*;
    } else if #[cfg(target_arch = "aarch64")] {
        mod aarch64;
        pub use aarch64::*;
    } else {
        pub use fallback::*;
    }
}
