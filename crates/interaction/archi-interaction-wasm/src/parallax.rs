//! Hero and call-to-action parallax.

use std::rc::Rc;

use anyhow::Result;
use web_sys::Event;

use archi_interaction_core::{Parallax, SiteConfig, Target};

use crate::dom::{listen, Page};

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let hero = page.bind_role(Target::HeroImage, page.query(".hero-img"));
    let cta_bg = page.bind_role(Target::CtaBackground, page.query(".cta-bg img"));
    if hero.is_none() && cta_bg.is_none() {
        return Ok(());
    }
    let cta = cta_bg.and_then(|_| page.query(".cta"));
    let parallax = Parallax::new(&cfg.parallax);

    let page_c = Rc::clone(page);
    listen(page.window(), "scroll", move |_: Event| {
        let cta_rect = cta.as_ref().map(|section| {
            let rect = section.get_bounding_client_rect();
            (rect.top(), rect.bottom())
        });
        let fx = parallax.on_scroll(page_c.page_y_offset(), page_c.viewport_height(), cta_rect);
        page_c.apply(fx, None);
    })
}
