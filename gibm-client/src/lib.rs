use std::cmp::Ordering;

use async_trait::async_trait;
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use tracing::info;

use gibm_tafel::{EventSource, RawEvent};

pub struct Gibm {
  client: Client,
  base: Url,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Job {
  #[serde(rename = "beruf_id", deserialize_with = "id")]
  pub id: String,
  #[serde(rename = "beruf_name")]
  pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Class {
  #[serde(rename = "klasse_id", deserialize_with = "id")]
  pub id: String,
  #[serde(rename = "klasse_name")]
  pub name: String,
  #[serde(rename = "klasse_longname", default)]
  pub long_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawId {
  Integer(i64),
  String(String),
}

fn id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
  Ok(match RawId::deserialize(deserializer)? {
    RawId::Integer(id) => id.to_string(),
    RawId::String(id) => id,
  })
}

impl Gibm {
  pub fn new(base: Url) -> Self {
    Self {
      client: Client::new(),
      base,
    }
  }

  /// All jobs, alphabetically ignoring case.
  pub async fn jobs(&self) -> anyhow::Result<Vec<Job>> {
    let mut jobs: Vec<Job> = self.get(self.base.join("berufe.php")?).await?;
    jobs.sort_by(|a, b| by_name(&a.name, &b.name));
    Ok(jobs)
  }

  pub async fn classes(&self, job_id: &str) -> anyhow::Result<Vec<Class>> {
    let mut url = self.base.join("klassen.php")?;
    url.query_pairs_mut().append_pair("beruf_id", job_id);

    let mut classes: Vec<Class> = self.get(url).await?;
    classes.sort_by(|a, b| by_name(&a.name, &b.name));
    Ok(classes)
  }

  /// Lessons of a class in `week`, formatted `<week>-<year>`.
  pub async fn timetable(&self, class_id: &str, week: &str) -> anyhow::Result<Vec<RawEvent>> {
    let mut url = self.base.join("tafel.php")?;
    url
      .query_pairs_mut()
      .append_pair("klasse_id", class_id)
      .append_pair("woche", week);

    // weeks without lessons may come back as `null`
    let events: Option<Vec<RawEvent>> = self.get(url).await?;
    Ok(events.unwrap_or_default())
  }

  async fn get<T: DeserializeOwned>(&self, url: Url) -> anyhow::Result<T> {
    let text = self
      .client
      .get(url.clone())
      .send()
      .await?
      .error_for_status()?
      .text()
      .await?;

    info!("Fetched {}", url);

    Ok(serde_json::from_str(&text)?)
  }
}

#[async_trait]
impl EventSource for Gibm {
  async fn fetch_events(&self, class_id: &str, week: &str) -> anyhow::Result<Vec<RawEvent>> {
    self.timetable(class_id, week).await
  }
}

fn by_name(a: &str, b: &str) -> Ordering {
  a.to_uppercase().cmp(&b.to_uppercase())
}

#[cfg(test)]
mod test {
  use crate::{by_name, Class, Job};

  #[test]
  fn ids_as_strings_or_numbers() {
    let jobs: Vec<Job> = serde_json::from_str(
      r#"[{"beruf_id": "7", "beruf_name": "Informatiker/-in"}, {"beruf_id": 8, "beruf_name": "Koch"}]"#,
    )
    .unwrap();

    assert_eq!(jobs[0].id, "7");
    assert_eq!(jobs[1].id, "8");
  }

  #[test]
  fn class_without_long_name() {
    let class: Class =
      serde_json::from_str(r#"{"klasse_id": "2559", "klasse_name": "INF21a"}"#).unwrap();

    assert_eq!(class.id, "2559");
    assert_eq!(class.long_name, "");
  }

  #[test]
  fn names_sort_ignoring_case() {
    let mut names = vec!["koch", "Automatiker", "Informatiker", "bäcker"];
    names.sort_by(|a, b| by_name(a, b));

    assert_eq!(names, ["Automatiker", "bäcker", "Informatiker", "koch"]);
  }
}
