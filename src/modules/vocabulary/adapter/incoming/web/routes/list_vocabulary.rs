use actix_web::{get, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::error;

use crate::modules::profile::application::domain::entities::VocabKind;
use crate::modules::vocabulary::application::ports::outgoing::vocabulary_query::{
    VocabListFilter, VocabOrdering,
};
use crate::shared::api::{ApiResponse, PageQuery};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct VocabListQuery {
    #[serde(flatten)]
    pub page: PageQuery,
    pub search: Option<String>,
    pub ordering: Option<String>,
}

impl VocabListQuery {
    fn into_filter(self) -> VocabListFilter {
        VocabListFilter {
            search: self.search,
            ordering: VocabOrdering::parse(self.ordering.as_deref()),
            offset: self.page.offset(),
            limit: self.page.page_size(),
        }
    }
}

async fn list(data: &web::Data<AppState>, kind: VocabKind, query: VocabListQuery) -> HttpResponse {
    match data
        .vocabulary_use_cases
        .list
        .execute(kind, query.into_filter())
        .await
    {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(e) => {
            error!("Listing {}s failed: {}", kind.noun().to_lowercase(), e);
            ApiResponse::internal_error()
        }
    }
}

/// List all niches
#[utoipa::path(
    get,
    path = "/freelancer/niches",
    tag = "vocabularies",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name"),
        ("ordering" = Option<String>, Query, description = "`name` (default) or `-name`"),
    ),
    responses((status = 200, description = "Niche list"))
)]
#[get("/freelancer/niches")]
pub async fn list_niches_handler(
    data: web::Data<AppState>,
    query: web::Query<VocabListQuery>,
) -> impl Responder {
    list(&data, VocabKind::Niche, query.into_inner()).await
}

/// List all skills
#[utoipa::path(
    get,
    path = "/freelancer/skills",
    tag = "vocabularies",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name"),
        ("ordering" = Option<String>, Query, description = "`name` (default) or `-name`"),
    ),
    responses((status = 200, description = "Skill list"))
)]
#[get("/freelancer/skills")]
pub async fn list_skills_handler(
    data: web::Data<AppState>,
    query: web::Query<VocabListQuery>,
) -> impl Responder {
    list(&data, VocabKind::Skill, query.into_inner()).await
}

/// List all languages
#[utoipa::path(
    get,
    path = "/freelancer/languages",
    tag = "vocabularies",
    params(
        ("search" = Option<String>, Query, description = "Substring match on name"),
        ("ordering" = Option<String>, Query, description = "`name` (default) or `-name`"),
    ),
    responses((status = 200, description = "Language list"))
)]
#[get("/freelancer/languages")]
pub async fn list_languages_handler(
    data: web::Data<AppState>,
    query: web::Query<VocabListQuery>,
) -> impl Responder {
    list(&data, VocabKind::Language, query.into_inner()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::profile::application::domain::entities::VocabItem;
    use crate::modules::vocabulary::application::use_cases::list_vocabulary::{
        IListVocabularyUseCase, ListVocabularyError,
    };
    use crate::tests::support::TestAppStateBuilder;
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct FixedList;

    #[async_trait]
    impl IListVocabularyUseCase for FixedList {
        async fn execute(
            &self,
            _kind: VocabKind,
            _filter: VocabListFilter,
        ) -> Result<Vec<VocabItem>, ListVocabularyError> {
            Ok(vec![VocabItem {
                id: 1,
                name: "Web".to_string(),
            }])
        }
    }

    #[actix_web::test]
    async fn vocab_lists_are_public() {
        let state = TestAppStateBuilder::default()
            .with_list_vocabulary(FixedList)
            .build();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .service(list_niches_handler),
        )
        .await;

        let req = test::TestRequest::get()
            .uri("/freelancer/niches")
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 200);
        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body[0]["name"], "Web");
    }
}
