use async_trait::async_trait;
use landmarks_boundary as json;
use landmarks_core::{
    entities::*,
    gateways::landmark_service::{Error, LandmarkService, Result},
    util::form::{self, Payload},
};
use landmarks_entities::url::ParseError;
use reqwest::{
    multipart::{Form, Part},
    Client, RequestBuilder, StatusCode,
};
use std::time::Duration;
use thiserror::Error;

/// All requests are sent to this script relative to the base URL.
pub const API_PATH: &str = "api.php";

#[derive(Debug, Error)]
pub enum SetupError {
    #[error("Invalid base URL: {0}")]
    Url(#[from] ParseError),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

/// Client of the remote landmark store.
#[derive(Debug, Clone)]
pub struct HttpLandmarkService {
    client: Client,
    endpoint: Url,
}

impl HttpLandmarkService {
    pub fn new(base_url: &Url, timeout: Duration) -> std::result::Result<Self, SetupError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint_url(base_url)?,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    async fn send(&self, request: RequestBuilder) -> Result<String> {
        let response = request.send().await.map_err(transport)?;
        let status = response.status();
        let body = response.text().await.map_err(transport)?;
        log::debug!("Received response with status {status}");
        if status == StatusCode::NOT_FOUND {
            return Err(Error::NotFound);
        }
        if !status.is_success() {
            return Err(Error::Status {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }
        Ok(body)
    }

    fn post(&self, payload: Payload) -> Result<RequestBuilder> {
        let request = self.client.post(self.endpoint.clone());
        let request = match payload {
            Payload::Multipart { fields, image } => {
                let mut form = Form::new();
                for (name, value) in fields {
                    form = form.text(name, value);
                }
                let part = Part::bytes(image.data.clone())
                    .file_name(EncodedImage::FILE_NAME)
                    .mime_str(EncodedImage::MEDIA_TYPE)
                    .map_err(transport)?;
                request.multipart(form.part(form::IMAGE_FIELD, part))
            }
            Payload::FieldsOnly(fields) => request.form(&fields),
        };
        Ok(request)
    }

    async fn find(&self, id: Id) -> Result<Landmark> {
        self.list()
            .await?
            .into_iter()
            .find(|lm| lm.id == id)
            .ok_or(Error::NotFound)
    }
}

#[async_trait(?Send)]
impl LandmarkService for HttpLandmarkService {
    async fn list(&self) -> Result<Vec<Landmark>> {
        let body = self
            .send(self.client.get(self.endpoint.clone()))
            .await?;
        parse_landmarks(&body)
    }

    async fn create(&self, new_landmark: &NewLandmark, image: &EncodedImage) -> Result<Landmark> {
        let request = self.post(form::create_payload(new_landmark, image))?;
        let body = self.send(request).await?;
        match parse_mutation_response(&body)? {
            MutationResponse::Landmark(landmark) => Ok(landmark),
            MutationResponse::Id(id) => self.find(id).await.map_err(|err| match err {
                Error::NotFound => {
                    Error::InvalidResponse(format!("created landmark {id} is missing"))
                }
                err => err,
            }),
            MutationResponse::Empty => {
                log::debug!("Looking up the created landmark by its title");
                self.list()
                    .await?
                    .into_iter()
                    .filter(|lm| lm.title == new_landmark.title)
                    .max_by_key(|lm| lm.id)
                    .ok_or_else(|| {
                        Error::InvalidResponse("the created landmark is missing".into())
                    })
            }
        }
    }

    async fn update(
        &self,
        changes: &LandmarkChanges,
        image: Option<&EncodedImage>,
    ) -> Result<Landmark> {
        let request = self.post(form::update_payload(changes, image))?;
        let body = self.send(request).await?;
        match parse_mutation_response(&body)? {
            MutationResponse::Landmark(landmark) => Ok(landmark),
            MutationResponse::Id(_) | MutationResponse::Empty => {
                let known = self.find(changes.id).await?;
                Ok(changes.clone().merge_into(known))
            }
        }
    }

    async fn delete(&self, id: Id) -> Result<()> {
        let request = self
            .client
            .delete(self.endpoint.clone())
            .query(&form::delete_query(id));
        self.send(request).await?;
        Ok(())
    }
}

fn endpoint_url(base_url: &Url) -> std::result::Result<Url, ParseError> {
    let mut base_url = base_url.clone();
    if !base_url.path().ends_with('/') {
        let path = format!("{}/", base_url.path());
        base_url.set_path(&path);
    }
    base_url.join(API_PATH)
}

fn transport(err: reqwest::Error) -> Error {
    if err.is_decode() {
        return Error::InvalidResponse(err.to_string());
    }
    if err.is_timeout() {
        log::warn!("Request timed out: {err}");
    }
    Error::Transport(err.to_string())
}

fn error_message(body: &str) -> String {
    serde_json::from_str::<json::ErrorMessage>(body)
        .ok()
        .and_then(json::ErrorMessage::into_text)
        .unwrap_or_else(|| body.trim().to_owned())
}

fn invalid_json(err: serde_json::Error) -> Error {
    Error::InvalidResponse(err.to_string())
}

fn parse_landmarks(body: &str) -> Result<Vec<Landmark>> {
    let landmarks: Vec<json::Landmark> = serde_json::from_str(body).map_err(invalid_json)?;
    Ok(landmarks
        .into_iter()
        .filter_map(|landmark| {
            Landmark::try_from(landmark)
                .map_err(|err| log::warn!("Skipping invalid landmark: {err}"))
                .ok()
        })
        .collect())
}

#[derive(Debug, PartialEq)]
enum MutationResponse {
    Landmark(Landmark),
    Id(Id),
    Empty,
}

fn parse_mutation_response(body: &str) -> Result<MutationResponse> {
    if body.trim().is_empty() {
        return Ok(MutationResponse::Empty);
    }
    let value: serde_json::Value = serde_json::from_str(body).map_err(invalid_json)?;
    let Some(object) = value.as_object() else {
        return Ok(MutationResponse::Empty);
    };
    if !object.contains_key("id") {
        return Ok(MutationResponse::Empty);
    }
    if object.contains_key("title") {
        let landmark: json::Landmark = serde_json::from_value(value).map_err(invalid_json)?;
        let landmark = Landmark::try_from(landmark)
            .map_err(|err| Error::InvalidResponse(err.to_string()))?;
        return Ok(MutationResponse::Landmark(landmark));
    }
    let created: json::Created = serde_json::from_value(value).map_err(invalid_json)?;
    let id = Id::try_from(created).map_err(|err| Error::InvalidResponse(err.to_string()))?;
    Ok(MutationResponse::Id(id))
}
