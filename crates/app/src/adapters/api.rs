//! HTTP adapter for the backend read endpoints.
//!
//! Implements the three read ports against the backend REST API. Every call
//! goes to the origin; nothing is cached client-side.

use async_trait::async_trait;
use repodeck_core::domain::{Article, ArticleId, MetricsSnapshot, RepoId, Repository};
use repodeck_core::error::FetchError;
use repodeck_core::ports::{ArticlePort, ArticleQuery, MetricsPort, ProfilePort};
use reqwest::{Client as HttpClient, StatusCode};
use serde::{de::DeserializeOwned, Deserialize};
use url::Url;

/// REST client for the dashboard's read endpoints
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: HttpClient,
    base_url: Url,
    token: String,
}

impl ApiClient {
    /// Create a new API client with a bearer token
    pub fn new(base_url: Url, token: String) -> Self {
        let http = HttpClient::builder()
            .user_agent("repodeck/0.1")
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url,
            token,
        }
    }

    /// Create a client from a base URL string
    pub fn from_url(base_url: &str, token: String) -> anyhow::Result<Self> {
        let base_url = Url::parse(base_url)?;
        Ok(Self::new(base_url, token))
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn join(&self, path: &str) -> Result<Url, FetchError> {
        self.base_url.join(path).map_err(|e| FetchError::Network {
            msg: format!("invalid request url: {e}"),
        })
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        repo: Option<RepoId>,
    ) -> Result<T, FetchError> {
        let response = self
            .http
            .get(url)
            .bearer_auth(&self.token)
            .send()
            .await
            .map_err(|e| FetchError::Network { msg: e.to_string() })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => return Err(FetchError::Auth),
            StatusCode::NOT_FOUND => {
                return Err(FetchError::NotFound {
                    id: repo.map(|r| r.to_string()).unwrap_or_else(|| "?".to_string()),
                })
            }
            status if !status.is_success() => {
                return Err(FetchError::Network {
                    msg: format!("unexpected status {status}"),
                })
            }
            _ => {}
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Network { msg: e.to_string() })
    }
}

// Wire DTOs - camelCase field names come from the backend

#[derive(Debug, Deserialize)]
struct ProfileResponse {
    #[serde(default)]
    repositories: Vec<RepositoryDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RepositoryDto {
    id: u64,
    name: String,
    reg_date: String,
    #[serde(default)]
    last_rq_commit: Option<String>,
    #[serde(default)]
    language: Option<String>,
}

impl From<RepositoryDto> for Repository {
    fn from(dto: RepositoryDto) -> Self {
        Repository {
            id: RepoId(dto.id),
            name: dto.name,
            reg_date: dto.reg_date,
            last_rq_commit: dto.last_rq_commit,
            language: dto.language,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ArticleListResponse {
    #[serde(default)]
    articles: Vec<ArticleDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleDto {
    id: u64,
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "extra__writer")]
    extra_writer: Option<String>,
    reg_date: String,
}

impl From<ArticleDto> for Article {
    fn from(dto: ArticleDto) -> Self {
        Article {
            id: ArticleId(dto.id),
            title: dto.title,
            writer: dto.extra_writer,
            reg_date: dto.reg_date,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MetricsDto {
    coverage: f64,
    bugs: f64,
    complexity: f64,
    code_smells: f64,
    duplicated_lines_density: f64,
    vulnerabilities: f64,
    total_score: f64,
}

impl From<MetricsDto> for MetricsSnapshot {
    fn from(dto: MetricsDto) -> Self {
        MetricsSnapshot {
            coverage: dto.coverage,
            bugs: dto.bugs,
            complexity: dto.complexity,
            code_smells: dto.code_smells,
            duplicated_lines_density: dto.duplicated_lines_density,
            vulnerabilities: dto.vulnerabilities,
            total_score: dto.total_score,
        }
    }
}

#[async_trait]
impl ProfilePort for ApiClient {
    async fn repositories(&self) -> Result<Vec<Repository>, FetchError> {
        let url = self.join("api/member/profile")?;
        let profile: ProfileResponse = self.get_json(url, None).await?;
        Ok(profile.repositories.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl ArticlePort for ApiClient {
    async fn articles(
        &self,
        repo: RepoId,
        query: &ArticleQuery,
    ) -> Result<Vec<Article>, FetchError> {
        let mut url = self.join("api/articles")?;
        url.query_pairs_mut()
            .append_pair("repositoryId", &repo.to_string())
            .append_pair("page", &query.page.to_string())
            .append_pair("searchItem", &query.search_item.to_string())
            .append_pair("keyword", &query.keyword);
        let list: ArticleListResponse = self.get_json(url, Some(repo)).await?;
        Ok(list.articles.into_iter().map(Into::into).collect())
    }
}

#[async_trait]
impl MetricsPort for ApiClient {
    async fn average_metrics(&self, repo: RepoId) -> Result<MetricsSnapshot, FetchError> {
        let url = self.join(&format!("api/repositories/{repo}/metrics/average"))?;
        let dto: MetricsDto = self.get_json(url, Some(repo)).await?;
        Ok(dto.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_response_deserializes_camel_case() {
        let json = r#"{
            "repositories": [
                {"id": 1, "name": "diff", "regDate": "2025-03-01T09:00:00Z",
                 "lastRqCommit": "abc123", "language": "Java"},
                {"id": 2, "name": "bare", "regDate": "2025-04-01T09:00:00Z"}
            ]
        }"#;
        let profile: ProfileResponse = serde_json::from_str(json).unwrap();
        let repos: Vec<Repository> = profile.repositories.into_iter().map(Into::into).collect();
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0].id, RepoId(1));
        assert_eq!(repos[0].last_rq_commit.as_deref(), Some("abc123"));
        assert_eq!(repos[1].last_rq_commit, None);
        assert_eq!(repos[1].language, None);
    }

    #[test]
    fn profile_response_tolerates_missing_repository_list() {
        let profile: ProfileResponse = serde_json::from_str("{}").unwrap();
        assert!(profile.repositories.is_empty());
    }

    #[test]
    fn article_dto_maps_extra_writer_and_optional_title() {
        let json = r#"{
            "articles": [
                {"id": 10, "title": "T", "extra__writer": "kim",
                 "regDate": "2025-05-01T09:00:00Z"},
                {"id": 11, "regDate": "2025-05-02T09:00:00Z"}
            ]
        }"#;
        let list: ArticleListResponse = serde_json::from_str(json).unwrap();
        let articles: Vec<Article> = list.articles.into_iter().map(Into::into).collect();
        assert_eq!(articles[0].writer.as_deref(), Some("kim"));
        assert_eq!(articles[1].title, None);
        assert_eq!(articles[1].writer, None);
    }

    #[test]
    fn metrics_dto_maps_all_seven_fields() {
        let json = r#"{
            "coverage": 80.0, "bugs": 2, "complexity": 5, "codeSmells": 3,
            "duplicatedLinesDensity": 1.2, "vulnerabilities": 0, "totalScore": 92
        }"#;
        let dto: MetricsDto = serde_json::from_str(json).unwrap();
        let snapshot: MetricsSnapshot = dto.into();
        assert_eq!(snapshot.coverage, 80.0);
        assert_eq!(snapshot.code_smells, 3.0);
        assert_eq!(snapshot.duplicated_lines_density, 1.2);
        assert_eq!(snapshot.total_score, 92.0);
    }

    #[test]
    fn article_url_carries_fixed_first_page_query() {
        let client = ApiClient::from_url("http://localhost:8080", "t".to_string()).unwrap();
        let mut url = client.join("api/articles").unwrap();
        let query = ArticleQuery::first_page();
        url.query_pairs_mut()
            .append_pair("repositoryId", "7")
            .append_pair("page", &query.page.to_string())
            .append_pair("searchItem", &query.search_item.to_string())
            .append_pair("keyword", &query.keyword);
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/articles?repositoryId=7&page=1&searchItem=0&keyword="
        );
    }
}
