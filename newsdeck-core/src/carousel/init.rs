//! Discovery and wiring of carousels in a host document.

use std::rc::Rc;

use super::animator::ScrollAnimator;
use super::controller::CarouselController;
use super::events::{EventSource, NavEvent};
use super::host::{CarouselHost, ListenTarget, NavControl, NavHandler};
use super::metrics::parse_step_count;
use crate::settings::CarouselSettings;
use newsdeck_model::{DATA_COUNT, DATA_LAYOUT, Layout};

/// Marker set on a wrapper once its carousel is wired.
pub const READY_ATTRIBUTE: &str = "data-carousel-ready";

pub type HostController<H> = CarouselController<
    <H as CarouselHost>::Track,
    ScrollAnimator<<H as CarouselHost>::Frames>,
>;

/// Wire every carousel wrapper under `root` that is not wired yet.
///
/// Safe to call repeatedly, for instance after new listings were inserted:
/// wrappers carrying [`READY_ATTRIBUTE`] are skipped, so no carousel gets a
/// second set of listeners. Wrappers without a track are left untouched.
pub fn init_carousels<H>(
    host: &H,
    root: &H::Node,
    settings: &CarouselSettings,
) -> Vec<Rc<HostController<H>>>
where
    H: CarouselHost,
{
    let supports_smooth = host.supports_smooth_scroll();
    let mut wired = Vec::new();

    for wrapper in host.wrappers(root) {
        if host.attribute(&wrapper, DATA_LAYOUT).as_deref()
            != Some(Layout::Carousel.as_str())
        {
            continue;
        }
        if host.attribute(&wrapper, READY_ATTRIBUTE).is_some() {
            continue;
        }
        let Some(track) = host.track(&wrapper) else {
            tracing::debug!("carousel wrapper has no track, skipping");
            continue;
        };

        let step_count =
            parse_step_count(host.attribute(&wrapper, DATA_COUNT).as_deref());
        let animator = ScrollAnimator::select(
            supports_smooth,
            host.frames(),
            settings.animation_duration_ms,
        );
        let controller = Rc::new(CarouselController::new(
            track.clone(),
            step_count,
            animator,
            settings.clone(),
        ));

        for control in [NavControl::Previous, NavControl::Next] {
            let Some(node) = host.control(&wrapper, control) else {
                continue;
            };
            let target = Rc::clone(&controller);
            let handler: NavHandler = Rc::new(move |event: &NavEvent| {
                target.handle(EventSource::Control(control), event)
            });
            host.listen(ListenTarget::Control(node, control), handler);
        }

        let target = Rc::clone(&controller);
        let handler: NavHandler = Rc::new(move |event: &NavEvent| {
            target.handle(EventSource::Track, event)
        });
        host.listen(ListenTarget::Track(track), handler);

        host.set_attribute(&wrapper, READY_ATTRIBUTE, "1");
        tracing::debug!(step_count, native = supports_smooth, "carousel wired");
        wired.push(controller);
    }

    wired
}
