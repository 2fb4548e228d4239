// Logging shims. These forward to `defmt` when the feature is enabled on a bare-metal
// target and otherwise compile down to nothing (arguments are still type-checked).

macro_rules! trace {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::trace!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( &$x, )*);
        }
    };
}

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::debug!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( &$x, )*);
        }
    };
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {
        {
            #[cfg(all(feature = "defmt", target_os = "none"))]
            ::defmt::warn!($s $(, $x)*);
            #[cfg(not(all(feature = "defmt", target_os = "none")))]
            let _ = ($( &$x, )*);
        }
    };
}
