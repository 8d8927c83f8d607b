pub mod cascade;
pub mod detect;
pub mod lexicon;
pub mod nationality;
pub mod normalize;
pub mod phone;
pub mod translit;
pub mod unicode;

pub use cascade::{Classifier, ClassifierBuilder};
pub use detect::Detector;
pub use detect::ethnic_hint::EthnicClassifier;
pub use lexicon::{Lexicon, LexiconBuilder, LexiconError};
pub use nationality::Nationality;
pub use phone::{PhoneRegion, PhoneResolver};
