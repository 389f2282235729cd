use crate::common::models::GenerationRequest;
use crate::client::services::image_store::decode_image;
use iced::widget::image;
use log::{error, info, warn};
use thiserror::Error;

/// Which backend endpoint a submission targets. Both send the prompt list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    Generate,
    RemoveBackground,
}

impl RequestKind {
    pub fn path(&self) -> &'static str {
        match self {
            RequestKind::Generate => "/generate-images/",
            RequestKind::RemoveBackground => "/remove-background/",
        }
    }

    pub fn failure_message(&self) -> &'static str {
        match self {
            RequestKind::Generate => "Image generation failed",
            RequestKind::RemoveBackground => "Background removal failed",
        }
    }
}

/// Identifies one submission; issued in increasing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum RequestPhase {
    #[default]
    Idle,
    Loading { kind: RequestKind, ticket: RequestTicket },
    Succeeded { kind: RequestKind },
    Failed { kind: RequestKind, error: String },
}

impl RequestPhase {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestPhase::Loading { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("Please log in to enter prompts")]
    LoginRequired,
    #[error("A request is already in progress")]
    Busy,
    #[error("Response does not belong to the request in flight")]
    StaleTicket,
}

/// A request ready to be sent: the ticket to settle with, the endpoint and the prompt snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub ticket: RequestTicket,
    pub kind: RequestKind,
    pub request: GenerationRequest,
}

/// One returned image: the base64 payload as received plus a decoded handle for display.
#[derive(Debug, Clone)]
pub struct GalleryImage {
    pub encoded: String,
    pub handle: Option<image::Handle>,
}

impl GalleryImage {
    fn decode(encoded: String) -> Self {
        let handle = match decode_image(&encoded) {
            Ok(bytes) => Some(image::Handle::from_memory(bytes)),
            Err(e) => {
                warn!("[GALLERY] Undecodable image payload: {}", e);
                None
            }
        };
        Self { encoded, handle }
    }
}

/// Images currently displayed. Replaced wholesale, never merged.
#[derive(Debug, Clone, Default)]
pub struct ImageSet {
    images: Vec<GalleryImage>,
}

impl ImageSet {
    pub fn replace(&mut self, encoded: Vec<String>) {
        self.images = encoded.into_iter().map(GalleryImage::decode).collect();
    }

    pub fn encoded(&self) -> Vec<&str> {
        self.images.iter().map(|i| i.encoded.as_str()).collect()
    }

    pub fn get(&self, index: usize) -> Option<&GalleryImage> {
        self.images.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &GalleryImage> {
        self.images.iter()
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }
}

/// Request lifecycle: at most one submission in flight, responses settle by ticket.
#[derive(Debug, Clone, Default)]
pub struct GenerationWorkflow {
    phase: RequestPhase,
    images: ImageSet,
    issued: u64,
}

impl GenerationWorkflow {
    pub fn phase(&self) -> &RequestPhase {
        &self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn images(&self) -> &ImageSet {
        &self.images
    }

    /// Fresh Idle workflow that keeps issuing tickets after this one's, so responses to
    /// requests sent before a reset can never settle the new workflow.
    pub fn detached(&self) -> Self {
        Self { issued: self.issued, ..Self::default() }
    }

    /// Idle/Succeeded/Failed -> Loading. Refused while another request is outstanding.
    pub fn begin(&mut self, kind: RequestKind, request: GenerationRequest) -> Result<Submission, WorkflowError> {
        if self.phase.is_loading() {
            return Err(WorkflowError::Busy);
        }
        self.issued += 1;
        let ticket = RequestTicket(self.issued);
        self.phase = RequestPhase::Loading { kind, ticket };
        info!("[WORKFLOW] {:?} request #{} with {} prompt(s)", kind, self.issued, request.text_prompts.len());
        Ok(Submission { ticket, kind, request })
    }

    /// Loading -> Succeeded (images replaced) or Failed (images kept).
    pub fn settle(&mut self, ticket: RequestTicket, result: Result<Vec<String>, String>) -> Result<RequestKind, WorkflowError> {
        let kind = match self.phase {
            RequestPhase::Loading { kind, ticket: current } if current == ticket => kind,
            _ => return Err(WorkflowError::StaleTicket),
        };
        self.phase = match result {
            Ok(images) => {
                info!("[WORKFLOW] {:?} request #{} returned {} image(s)", kind, ticket.0, images.len());
                self.images.replace(images);
                RequestPhase::Succeeded { kind }
            }
            Err(e) => {
                error!("There was an error {}: {}", match kind {
                    RequestKind::Generate => "generating the images",
                    RequestKind::RemoveBackground => "removing the background",
                }, e);
                RequestPhase::Failed { kind, error: e }
            }
        };
        Ok(kind)
    }
}
