use gloo_file::{File as GlooFile, ObjectUrl};
use shared::{InferenceError, InferenceResult, MediaType, Phase, SubmissionId, UploadFlow};
use std::cell::Cell;
use std::rc::Rc;
use yew::prelude::*;

use crate::components::handlers;
use crate::components::utils::debounce;
use crate::components::header::{render_header, render_instructions};
use crate::components::preview_area::render_preview_area;
use crate::components::results::render_results;
use crate::components::upload_section::render_upload_section;
use crate::components::Loader;

pub enum Msg {
    SelectMediaType(MediaType),
    FileChosen(GlooFile),
    Submit,
    InferenceCompleted(SubmissionId, Result<InferenceResult, InferenceError>),
}

pub struct Upload {
    pub flow: UploadFlow<GlooFile, ObjectUrl>,
    /// Cleared on unmount so late responses are dropped.
    pub alive: Rc<Cell<bool>>,
    pub file_input: NodeRef,
    /// Built once so a re-render cannot drop a pending debounce timeout.
    pub submit: Callback<MouseEvent>,
}

impl Component for Upload {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();

        Self {
            flow: UploadFlow::new(),
            alive: Rc::new(Cell::new(true)),
            file_input: NodeRef::default(),
            submit: debounce(300, move || link.send_message(Msg::Submit)),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SelectMediaType(media_type) => handlers::handle_select_media_type(self, media_type),
            Msg::FileChosen(file) => handlers::handle_file_chosen(self, file),
            Msg::Submit => handlers::handle_submit(self, ctx),
            Msg::InferenceCompleted(id, response) => {
                handlers::handle_inference_completed(self, id, response)
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let phase = self.flow.phase();

        html! {
            <div class="upload-page">
                <div class="upload-inner">
                    { render_header() }
                    <div class="upload-controls">
                        { render_instructions() }
                        { render_upload_section(self, ctx) }
                        if phase == Phase::Submitting {
                            <Loader />
                        } else if phase == Phase::Ready {
                            { render_preview_area(self) }
                        }
                    </div>
                    if phase == Phase::Completed {
                        { render_results(self.flow.result()) }
                    }
                </div>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.alive.set(false);
    }
}
