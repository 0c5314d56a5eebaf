//! GitHub REST API data source
//!
//! Derives totals, a pushed-repository activity series, star rankings,
//! language distribution, and engagement comparisons from a user's
//! public repositories. Works unauthenticated; a token (read from the
//! configured environment variable) raises the rate limit.

use async_trait::async_trait;
use chrono::{DateTime, Datelike, Months, Utc};
use reqwest::Client;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;
use tracing::{debug, warn};

use a2ui::{CategoryShare, NamedSeries, ScalarValue, SeriesPoint, TableRow};

use super::{DataSource, SourceError};
use crate::config::SourceConfig;
use crate::domain::{DataFragment, DataRequest, Grouping, MetricKind, RawData};

/// Languages reported in the distribution, largest shares first
const MAX_LANGUAGES: usize = 5;

/// GitHub API data source
pub struct GitHubSource {
    user: String,
    base_url: String,
    token: Option<String>,
    http: Client,
    top_repos: usize,
}

#[derive(Debug, Deserialize)]
struct UserResponse {
    #[serde(default)]
    followers: i64,
}

#[derive(Debug, Clone, Deserialize)]
struct RepoResponse {
    name: String,
    #[serde(default)]
    stargazers_count: i64,
    #[serde(default)]
    forks_count: i64,
    language: Option<String>,
    #[serde(default)]
    fork: bool,
    pushed_at: Option<DateTime<Utc>>,
}

impl GitHubSource {
    /// Create a source from configuration
    ///
    /// Reads an optional API token from the environment variable named
    /// in the config; absence is not an error.
    pub fn from_config(config: &SourceConfig) -> Result<Self, SourceError> {
        if config.user.trim().is_empty() {
            return Err(SourceError::Unavailable(
                "github source requires a user; set source.user or pass --user".to_string(),
            ));
        }

        let token = std::env::var(&config.token_env).ok();
        if token.is_none() {
            debug!(env = %config.token_env, "GitHubSource: no token, using unauthenticated requests");
        }

        let http = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent("agui")
            .build()
            .map_err(SourceError::Network)?;

        Ok(Self {
            user: config.user.clone(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token,
            http,
            top_repos: config.top_repos,
        })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, SourceError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "GitHubSource::get_json");

        let mut builder = self.http.get(&url).header("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await?;
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "GitHubSource: API error");
            return Err(SourceError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| SourceError::InvalidPayload(e.to_string()))
    }

    fn build_fragments(
        &self,
        request: &DataRequest,
        user: &UserResponse,
        repos: &[RepoResponse],
        now: DateTime<Utc>,
    ) -> RawData {
        let mut fragments = Vec::new();
        let own: Vec<&RepoResponse> = repos.iter().filter(|r| !r.fork).collect();

        if request.wants(MetricKind::Totals) {
            let stars: i64 = own.iter().map(|r| r.stargazers_count).sum();
            fragments.push(DataFragment::Scalar {
                name: "Repositories".to_string(),
                value: ScalarValue::Int(own.len() as i64),
                context: Some("Excluding forks".to_string()),
            });
            fragments.push(DataFragment::Scalar {
                name: "Total Stars".to_string(),
                value: ScalarValue::Int(stars),
                context: None,
            });
            fragments.push(DataFragment::Scalar {
                name: "Followers".to_string(),
                value: ScalarValue::Int(user.followers),
                context: None,
            });
            if let Some(language) = top_language(&own) {
                fragments.push(DataFragment::Scalar {
                    name: "Top Language".to_string(),
                    value: ScalarValue::Text(language),
                    context: Some("Most used across repositories".to_string()),
                });
            }
        }

        if request.wants(MetricKind::ActivitySeries) {
            let grouping = request.grouping.unwrap_or(Grouping::Monthly);
            fragments.push(DataFragment::Series {
                name: "Repositories Pushed".to_string(),
                points: activity_series(&own, request.range.months, grouping, now),
            });
        }

        if request.wants(MetricKind::TopRepositories) {
            let mut ranked = own.clone();
            ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
            let rows: Vec<TableRow> = ranked
                .iter()
                .take(self.top_repos)
                .map(|r| {
                    TableRow(vec![
                        ScalarValue::Text(r.name.clone()),
                        ScalarValue::Int(r.stargazers_count),
                        ScalarValue::Text(r.language.clone().unwrap_or_else(|| "-".to_string())),
                    ])
                })
                .collect();
            fragments.push(DataFragment::Ranked {
                name: "Top Repositories".to_string(),
                columns: vec!["Name".to_string(), "Stars".to_string(), "Language".to_string()],
                rows,
            });
        }

        if request.wants(MetricKind::LanguageDistribution) {
            fragments.push(DataFragment::Categorical {
                name: "Language Distribution".to_string(),
                shares: language_distribution(&own),
            });
        }

        if request.wants(MetricKind::EngagementComparison) {
            let mut ranked = own.clone();
            ranked.sort_by(|a, b| b.stargazers_count.cmp(&a.stargazers_count));
            ranked.truncate(self.top_repos);
            fragments.push(DataFragment::Paired {
                name: "Stars vs Forks".to_string(),
                series: vec![
                    NamedSeries {
                        name: "Stars".to_string(),
                        points: ranked
                            .iter()
                            .map(|r| SeriesPoint::new(r.name.clone(), r.stargazers_count as f64))
                            .collect(),
                    },
                    NamedSeries {
                        name: "Forks".to_string(),
                        points: ranked
                            .iter()
                            .map(|r| SeriesPoint::new(r.name.clone(), r.forks_count as f64))
                            .collect(),
                    },
                ],
            });
        }

        RawData::from_fragments(fragments)
    }
}

#[async_trait]
impl DataSource for GitHubSource {
    async fn fetch(&self, request: &DataRequest) -> Result<RawData, SourceError> {
        debug!(user = %self.user, metric_count = request.metrics.len(), "GitHubSource::fetch");

        let user_path = format!("/users/{}", self.user);
        let repos_path = format!("/users/{}/repos?per_page=100&sort=pushed", self.user);

        let (user, repos) = futures::future::try_join(
            self.get_json::<UserResponse>(&user_path),
            self.get_json::<Vec<RepoResponse>>(&repos_path),
        )
        .await?;

        Ok(self.build_fragments(request, &user, &repos, Utc::now()))
    }
}

/// Most common primary language across repositories
fn top_language(repos: &[&RepoResponse]) -> Option<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repos {
        if let Some(language) = &repo.language {
            *counts.entry(language.as_str()).or_default() += 1;
        }
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(language, _)| language.to_string())
}

/// Percentage share of repositories per language, largest first
fn language_distribution(repos: &[&RepoResponse]) -> Vec<CategoryShare> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for repo in repos {
        if let Some(language) = &repo.language {
            *counts.entry(language.as_str()).or_default() += 1;
        }
    }

    let total: usize = counts.values().sum();
    if total == 0 {
        return Vec::new();
    }

    let mut shares: Vec<CategoryShare> = counts
        .into_iter()
        .map(|(language, count)| CategoryShare::new(language, (count as f64 / total as f64 * 100.0).round()))
        .collect();
    shares.sort_by(|a, b| b.value.partial_cmp(&a.value).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.name.cmp(&b.name)));
    shares.truncate(MAX_LANGUAGES);
    shares
}

/// Count pushed repositories per bucket over the trailing range
fn activity_series(repos: &[&RepoResponse], months: u32, grouping: Grouping, now: DateTime<Utc>) -> Vec<SeriesPoint> {
    let labels = match grouping {
        Grouping::Monthly => month_labels(now, months),
        Grouping::Weekly => week_labels(now, months * 4),
    };

    let mut counts: HashMap<String, f64> = HashMap::new();
    for repo in repos {
        if let Some(pushed_at) = repo.pushed_at {
            let label = match grouping {
                Grouping::Monthly => pushed_at.format("%Y-%m").to_string(),
                Grouping::Weekly => pushed_at.format("%G-W%V").to_string(),
            };
            *counts.entry(label).or_default() += 1.0;
        }
    }

    labels
        .into_iter()
        .map(|label| {
            let value = counts.get(&label).copied().unwrap_or(0.0);
            SeriesPoint::new(label, value)
        })
        .collect()
}

/// Trailing month labels in chronological order, current month last
fn month_labels(now: DateTime<Utc>, months: u32) -> Vec<String> {
    let today = now.date_naive();
    (0..months)
        .rev()
        .filter_map(|back| today.checked_sub_months(Months::new(back)))
        .map(|date| format!("{:04}-{:02}", date.year(), date.month()))
        .collect()
}

/// Trailing ISO-week labels in chronological order, current week last
fn week_labels(now: DateTime<Utc>, weeks: u32) -> Vec<String> {
    (0..weeks as i64)
        .rev()
        .map(|back| (now - chrono::Duration::weeks(back)).format("%G-W%V").to_string())
        .collect()
}
