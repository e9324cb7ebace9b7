use shared::mask_data_uri;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MaskGalleryProps {
    /// Base64 encoded PNG masks as returned by the inference service.
    #[prop_or_default]
    pub masks: Vec<String>,
}

/// A thumbnail's `src` and `alt`.
pub type Thumbnail = (String, String);

#[derive(Debug, Clone, PartialEq)]
pub enum GalleryView {
    Empty,
    Thumbnails(Vec<Thumbnail>),
}

pub const EMPTY_MESSAGE: &str = "No masks detected.";

pub fn gallery_view(masks: &[String]) -> GalleryView {
    if masks.is_empty() {
        return GalleryView::Empty;
    }

    GalleryView::Thumbnails(
        masks
            .iter()
            .enumerate()
            .map(|(i, mask)| (mask_data_uri(mask), format!("Mask {}", i + 1)))
            .collect(),
    )
}

#[function_component(MaskGallery)]
pub fn mask_gallery(props: &MaskGalleryProps) -> Html {
    match gallery_view(&props.masks) {
        GalleryView::Empty => html! { <p class="empty-masks">{ EMPTY_MESSAGE }</p> },
        GalleryView::Thumbnails(thumbnails) => html! {
            <div class="mask-grid">
                { for thumbnails.into_iter().enumerate().map(|(i, (src, alt))| html! {
                    <img key={i} class="mask-thumb" {src} {alt} />
                })}
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_masks_shows_empty_state() {
        assert_eq!(gallery_view(&[]), GalleryView::Empty);
    }

    #[test]
    fn one_thumbnail_per_mask_in_order() {
        let masks = vec!["aGVsbG8=".to_string(), "d29ybGQ=".to_string()];

        assert_eq!(
            gallery_view(&masks),
            GalleryView::Thumbnails(vec![
                ("data:image/png;base64,aGVsbG8=".into(), "Mask 1".into()),
                ("data:image/png;base64,d29ybGQ=".into(), "Mask 2".into()),
            ])
        );
    }

    #[test]
    fn malformed_entries_are_passed_through() {
        let masks = vec!["not base64 at all".to_string()];

        match gallery_view(&masks) {
            GalleryView::Thumbnails(thumbnails) => {
                assert_eq!(thumbnails.len(), 1);
                assert_eq!(thumbnails[0].0, "data:image/png;base64,not base64 at all");
            }
            other => panic!("expected thumbnails, got {:?}", other),
        }
    }
}
