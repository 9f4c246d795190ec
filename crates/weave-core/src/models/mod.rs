pub mod change_event;
pub mod drift_alert;
pub mod field_change;
pub mod health_score;
pub mod initiation;
pub mod interaction;
pub mod pattern;
pub mod portfolio;
pub mod prediction;
pub mod preferences;
pub mod relationship;
pub mod suggestion;
pub mod tier;
pub mod tier_fit;

pub use change_event::ChangeEvent;
pub use drift_alert::{DriftAlert, DriftStatus};
pub use field_change::FieldChange;
pub use health_score::HealthScore;
pub use initiation::{InitiationRatio, InitiationStats, Initiator};
pub use interaction::{Interaction, InteractionCategory, InteractionStatus};
pub use pattern::{DayOfWeek, Pattern};
pub use portfolio::{
    Archetype, ArchetypeShare, CategoryShare, Imbalance, ImbalanceKind, ImbalanceSeverity,
    PortfolioSnapshot, TierBreakdown,
};
pub use prediction::{
    AtRiskRelationship, CompositeHealth, DriftPrediction, NetworkForecast, SignalContribution,
    SignalKind,
};
pub use preferences::{Season, UserPreferences};
pub use relationship::{Relationship, RelationshipId};
pub use suggestion::{
    DismissalMap, ProactiveSuggestion, SuggestionEvent, SuggestionKind, SuggestionLifecycle,
    SuggestionUrgency,
};
pub use tier::Tier;
pub use tier_fit::{FitCategory, TierFitAnalysis};
