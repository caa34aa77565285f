use super::Cell;

/// Trait for cellular automaton rules.
/// A rule only sees a cell's current state and its live neighbor count.
pub trait Rule: Send + Sync {
    /// Name of the rule
    fn name(&self) -> &str;

    /// Rulestring in B/S notation
    fn notation(&self) -> String;

    /// Apply rule to compute next cell state
    fn evolve(&self, current: Cell, neighbors: u8) -> Cell;
}

/// Conway's Game of Life (B3/S23)
#[derive(Clone, Copy, Debug, Default)]
pub struct ConwayRule;

impl Rule for ConwayRule {
    fn name(&self) -> &str {
        "conway"
    }

    fn notation(&self) -> String {
        "B3/S23".to_owned()
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        match (current, neighbors) {
            // Underpopulation
            (Cell::Alive, 0..=1) => Cell::Dead,
            (Cell::Alive, 2 | 3) => Cell::Alive,
            // Overpopulation
            (Cell::Alive, _) => Cell::Dead,
            // Birth
            (Cell::Dead, 3) => Cell::Alive,
            (Cell::Dead, _) => Cell::Dead,
        }
    }
}

/// Any outer-totalistic rule on the Moore neighborhood, stored as two
/// bitmasks indexed by neighbor count (bit `n` set = count `n` applies).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LifeLikeRule {
    name: String,
    birth: u16,
    survival: u16,
}

impl LifeLikeRule {
    pub fn new(name: impl Into<String>, birth: &[u8], survival: &[u8]) -> Self {
        Self {
            name: name.into(),
            birth: mask_of(birth),
            survival: mask_of(survival),
        }
    }

    /// HighLife (B36/S23), known for its replicator
    pub fn highlife() -> Self {
        Self::new("highlife", &[3, 6], &[2, 3])
    }

    /// Seeds (B2/S), every live cell dies each generation
    pub fn seeds() -> Self {
        Self::new("seeds", &[2], &[])
    }

    /// Day & Night (B3678/S34678), symmetric under inversion
    pub fn day_and_night() -> Self {
        Self::new("day-and-night", &[3, 6, 7, 8], &[3, 4, 6, 7, 8])
    }

    /// Parse a rulestring such as `B36/S23` (case-insensitive).
    pub fn parse(notation: &str) -> Option<Self> {
        let upper = notation.trim().to_ascii_uppercase();
        let (birth, survival) = upper.split_once('/')?;
        let birth = digits(birth.strip_prefix('B')?)?;
        let survival = digits(survival.strip_prefix('S')?)?;
        Some(Self::new(upper, &birth, &survival))
    }
}

fn mask_of(counts: &[u8]) -> u16 {
    counts
        .iter()
        .filter(|&&n| n <= 8)
        .fold(0, |mask, &n| mask | (1 << n))
}

fn digits(s: &str) -> Option<Vec<u8>> {
    s.chars()
        .map(|c| c.to_digit(10).filter(|&d| d <= 8).map(|d| d as u8))
        .collect()
}

fn format_mask(mask: u16) -> String {
    (0..=8u8)
        .filter(|n| mask & (1 << n) != 0)
        .map(|n| char::from(b'0' + n))
        .collect()
}

impl Rule for LifeLikeRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn notation(&self) -> String {
        format!("B{}/S{}", format_mask(self.birth), format_mask(self.survival))
    }

    fn evolve(&self, current: Cell, neighbors: u8) -> Cell {
        let mask = match current {
            Cell::Alive => self.survival,
            Cell::Dead => self.birth,
        };
        Cell::from_alive(neighbors <= 8 && mask & (1 << neighbors) != 0)
    }
}

/// Get all named rules
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(ConwayRule),
        Box::new(LifeLikeRule::highlife()),
        Box::new(LifeLikeRule::seeds()),
        Box::new(LifeLikeRule::day_and_night()),
    ]
}

/// Look a rule up by name, falling back to B/S notation
pub fn rule_by_name(name: &str) -> Option<Box<dyn Rule>> {
    all_rules()
        .into_iter()
        .find(|rule| rule.name().eq_ignore_ascii_case(name))
        .or_else(|| LifeLikeRule::parse(name).map(|rule| Box::new(rule) as Box<dyn Rule>))
}

/// Get default rule (Conway's Life)
pub fn default_rule() -> Box<dyn Rule> {
    Box::new(ConwayRule)
}
