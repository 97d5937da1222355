pub struct DefaultsConfig {
    pub include_hetero: bool,
    pub residue_names: &'static str,
    pub pretty_json: bool,
    pub fasta_width: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            include_hetero: true,
            residue_names: "first-seen",
            pretty_json: false,
            fasta_width: 60,
        }
    }
}
