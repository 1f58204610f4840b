use crate::views::TemplateView;

/// Markers map page.
pub struct MarkersMapView;

impl TemplateView for MarkersMapView {
    const TEMPLATE_NAME: &'static str = "map.html";
}
