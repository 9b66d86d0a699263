use kernel::named_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
}

named_code!(Gender, "Gender", {
    Male => "MALE",
    Female => "FEMALE",
});
