//! C++ duration literals.

use lfgen_core::TimeUnit;

/// Literal suffix for a unit in C++ (`std::chrono` literals).
///
/// Weeks have no chrono literal and are expanded to days times seven. Units without an entry render as a bare
/// magnitude.
pub fn cpp_unit(unit: TimeUnit) -> &'static str {
    match unit {
        TimeUnit::Second => "s",
        TimeUnit::Minute => "min",
        TimeUnit::Hour => "h",
        TimeUnit::Day => "d",
        TimeUnit::Week => "d*7",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_table() {
        assert_eq!(cpp_unit(TimeUnit::Second), "s");
        assert_eq!(cpp_unit(TimeUnit::Minute), "min");
        assert_eq!(cpp_unit(TimeUnit::Hour), "h");
        assert_eq!(cpp_unit(TimeUnit::Day), "d");
        assert_eq!(cpp_unit(TimeUnit::Week), "d*7");
    }

    #[test]
    fn unlisted_units_have_no_suffix() {
        for unit in [TimeUnit::Nano, TimeUnit::Micro, TimeUnit::Milli, TimeUnit::None] {
            assert_eq!(cpp_unit(unit), "");
        }
    }
}
