use std::sync::Arc;

use crate::modules::vocabulary::application::use_cases::{
    create_vocabulary::ICreateVocabularyUseCase, list_vocabulary::IListVocabularyUseCase,
};

#[derive(Clone)]
pub struct VocabularyUseCases {
    pub list: Arc<dyn IListVocabularyUseCase + Send + Sync>,
    pub create: Arc<dyn ICreateVocabularyUseCase + Send + Sync>,
}
