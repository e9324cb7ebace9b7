use yew::prelude::*;

/// Renders the Upload page header
pub fn render_header() -> Html {
    html! {
        <header class="page-header">
            <h1>{"Analyze Road Media for Pothole Detection"}</h1>
            <p class="subtitle">
                {"Upload an image or video. InfraScan highlights potholes with confidence above 80%."}
            </p>
        </header>
    }
}

pub fn render_instructions() -> Html {
    html! {
        <div class="instructions">
            <h2>{"Steps to Use:"}</h2>
            <ol>
                <li>{"Select the media type: "}<strong>{"Image"}</strong>{" or "}<strong>{"Video"}</strong>{"."}</li>
                <li>{"Upload a file using the button below."}</li>
                <li>{"Click "}<strong>{"Upload & Predict"}</strong>{"."}</li>
                <li>{"Wait a few seconds for analysis to complete."}</li>
                <li>{"View highlighted regions indicating pothole detections."}</li>
            </ol>
        </div>
    }
}
