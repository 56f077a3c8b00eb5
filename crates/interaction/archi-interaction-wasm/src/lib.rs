//! wasm-bindgen adapter for the Archi Concept interaction layer.
//!
//! Looks up the tagged page elements, registers browser listeners and
//! applies the effects returned by `archi-interaction-core` controllers.
//! Missing page sections are skipped; nothing here throws once mounted.

use std::rc::Rc;

use log::{info, warn};
use serde_wasm_bindgen as swb;
use wasm_bindgen::prelude::*;

use archi_interaction_core::SiteConfig;

mod contact;
mod count_up;
mod dom;
mod filter;
mod lightbox;
mod logging;
mod nav;
mod parallax;
mod reveal;

use dom::Page;

#[wasm_bindgen]
pub struct ArchiSite {
    config: SiteConfig,
    page: Option<Rc<Page>>,
}

fn jsvalue_is_undefined_or_null(v: &JsValue) -> bool {
    v.is_undefined() || v.is_null()
}

#[wasm_bindgen]
impl ArchiSite {
    /// Create the site controller. Pass a partial config object or
    /// undefined/null for the production defaults.
    /// Example:
    ///   new ArchiSite({ nav: { header_offset: 64 }, log_level: "debug" })
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<ArchiSite, JsError> {
        console_error_panic_hook::set_once();

        let config: SiteConfig = if jsvalue_is_undefined_or_null(&config) {
            SiteConfig::default()
        } else {
            swb::from_value(config).map_err(|e| JsError::new(&format!("config error: {e}")))?
        };
        config.validate()?;
        logging::init(config.log_level_filter()?);

        Ok(ArchiSite { config, page: None })
    }

    /// Wire every behavior to the current document. Call once the DOM is
    /// ready; repeated calls are ignored.
    pub fn mount(&mut self) -> Result<(), JsError> {
        if self.page.is_some() {
            return Ok(());
        }
        let page = Rc::new(Page::new().map_err(|e| JsError::new(&format!("{e:#}")))?);
        let cfg = &self.config;

        let parts: [(&str, anyhow::Result<()>); 9] = [
            ("keyframes", filter::inject_keyframes(&page)),
            ("navigation", nav::mount(&page, cfg)),
            ("reveal", reveal::mount(&page, cfg)),
            ("filter", filter::mount(&page)),
            ("lightbox", lightbox::mount(&page, cfg)),
            ("count-up", count_up::mount(&page, cfg)),
            ("smooth scroll", nav::mount_smooth_scroll(&page, cfg)),
            ("contact form", contact::mount(&page, cfg)),
            ("parallax", parallax::mount(&page, cfg)),
        ];
        for (name, result) in parts {
            if let Err(e) = result {
                warn!("{name} disabled: {e:#}");
            }
        }
        info!("site interactions mounted");
        self.page = Some(page);
        Ok(())
    }

    #[wasm_bindgen(getter)]
    pub fn mounted(&self) -> bool {
        self.page.is_some()
    }

    /// Active configuration as a plain JS object.
    pub fn config(&self) -> Result<JsValue, JsError> {
        swb::to_value(&self.config).map_err(|e| JsError::new(&format!("config error: {e}")))
    }
}

/// Construct and mount in one call, for pages that only need defaults.
#[wasm_bindgen(js_name = initSite)]
pub fn init_site(config: JsValue) -> Result<ArchiSite, JsError> {
    let mut site = ArchiSite::new(config)?;
    site.mount()?;
    Ok(site)
}

/// Numeric ABI version for compatibility checks at init.
#[wasm_bindgen]
pub fn abi_version() -> u32 {
    1
}
