use kernel::named_code;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TopicCriticality {
    Critical,
    #[default]
    Uncritical,
}

named_code!(TopicCriticality, "TopicCriticality", {
    Critical => "CRITICAL",
    Uncritical => "UNCRITICAL",
});
