use std::fmt;

/// Width of one row in grid units, matching the CSS framework's
/// twelve-column system.
pub const GRID_UNITS: u32 = 12;

/// Column width as a count of grid units out of [`GRID_UNITS`].
///
/// Always in `1..=12`: a row wider than twelve images still gets
/// one-unit columns rather than a zero span the framework has no
/// class for.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Span(u32);

impl Span {
    /// Span shared by every column of a row holding `images_per_row`
    /// images. An `images_per_row` of 0 is treated as 1.
    pub fn for_row_of(images_per_row: u32) -> Span {
        let per_row = images_per_row.max(1);
        Span((GRID_UNITS / per_row).max(1))
    }

    pub fn units(&self) -> u32 {
        self.0
    }

    /// The framework's column class for this width.
    pub fn class(&self) -> String {
        format!("col-sm-{}", self.0)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn span_divides_the_row_evenly() {
        assert_eq!(Span::for_row_of(1).units(), 12);
        assert_eq!(Span::for_row_of(2).units(), 6);
        assert_eq!(Span::for_row_of(3).units(), 4);
        assert_eq!(Span::for_row_of(4).units(), 3);
        assert_eq!(Span::for_row_of(6).units(), 2);
        assert_eq!(Span::for_row_of(12).units(), 1);
    }

    #[test]
    fn uneven_rows_round_down() {
        assert_eq!(Span::for_row_of(5).units(), 2);
        assert_eq!(Span::for_row_of(7).units(), 1);
    }

    #[test]
    fn span_never_reaches_zero() {
        assert_eq!(Span::for_row_of(13).units(), 1);
        assert_eq!(Span::for_row_of(100).units(), 1);
    }

    #[test]
    fn zero_images_per_row_acts_as_one() {
        assert_eq!(Span::for_row_of(0), Span::for_row_of(1));
    }

    #[test]
    fn class_names_the_framework_column() {
        assert_eq!(Span::for_row_of(4).class(), "col-sm-3");
        assert_eq!(Span::for_row_of(2).class(), "col-sm-6");
    }
}
