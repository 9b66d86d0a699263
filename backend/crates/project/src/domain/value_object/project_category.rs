use kernel::named_code;

/// Kind of construction project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectCategory {
    /// New building
    Nb,
    /// Conversion
    Ob,
    /// Refurbishment
    Rb,
}

named_code!(ProjectCategory, "ProjectCategory", {
    Nb => "NB",
    Ob => "OB",
    Rb => "RB",
});
