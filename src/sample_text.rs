use rand::seq::SliceRandom;

/// Source of target texts for new sessions.
pub trait SampleProvider {
    fn pick(&self) -> String;
}

/// The built-in practice corpus: short Chinese proverbs and aphorisms.
pub const SAMPLE_TEXTS: &[&str] = &[
    "生活就像骑自行车，为了保持平衡，你必须保持前进。",
    "学而不思则罔，思而不学则殆。",
    "千里之行，始于足下。",
    "不积跬步，无以至千里；不积小流，无以成江海。",
    "工欲善其事，必先利其器。",
    "天行健，君子以自强不息。",
    "业精于勤，荒于嬉；行成于思，毁于随。",
    "知之者不如好之者，好之者不如乐之者。",
    "读书破万卷，下笔如有神。",
    "书山有路勤为径，学海无涯苦作舟。",
];

/// Picks a random built-in sample for each session.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinSamples;

impl SampleProvider for BuiltinSamples {
    fn pick(&self) -> String {
        let rng = &mut rand::thread_rng();
        SAMPLE_TEXTS
            .choose(rng)
            .copied()
            .unwrap_or_default()
            .to_string()
    }
}

/// Always returns the same text; used by tests and custom-prompt hosts.
#[derive(Debug, Clone)]
pub struct FixedSample(pub String);

impl FixedSample {
    pub fn new<S: Into<String>>(text: S) -> Self {
        Self(text.into())
    }
}

impl SampleProvider for FixedSample {
    fn pick(&self) -> String {
        self.0.clone()
    }
}
