pub mod history;
pub mod levels;
pub mod record;
pub mod scales;
pub mod test_type;

pub use history::HistoryEntry;
pub use levels::{BurnoutRisk, DepressionLevel, Level, MaslachVerdict, Severity};
pub use record::{
    BoykoScores, HeckHessScores, MaslachInterpretation, MaslachScores, QuickScores,
    RecommendationBlock, ResultRecord, ScaleLevel, ScaleResult,
};
pub use scales::{HeckHessScale, MaslachScale, Phase};
pub use test_type::TestType;
