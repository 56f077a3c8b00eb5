//! Count-up wiring: viewport entry starts a counter, the frame clock
//! drives it until every counter has landed.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use anyhow::Result;
use log::debug;
use wasm_bindgen::prelude::*;

use archi_interaction_core::{CountUpBoard, ElementId, SiteConfig};

use crate::dom::{data_attr, intersection_observer, js_err, Page};

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request_frame(page: &Page, callback: &FrameCallback) -> Result<()> {
    if let Some(cb) = callback.borrow().as_ref() {
        page.window()
            .request_animation_frame(cb.as_ref().unchecked_ref())
            .map_err(js_err)?;
    }
    Ok(())
}

pub fn mount(page: &Rc<Page>, cfg: &SiteConfig) -> Result<()> {
    let targets = page.query_all(".trust-number");
    if targets.is_empty() {
        return Ok(());
    }
    let board = Rc::new(RefCell::new(CountUpBoard::new(&cfg.count_up)));
    let scheduled = Rc::new(Cell::new(false));
    let frame: FrameCallback = Rc::new(RefCell::new(None));

    {
        let page_c = Rc::clone(page);
        let board_c = Rc::clone(&board);
        let scheduled_c = Rc::clone(&scheduled);
        let frame_c = Rc::clone(&frame);
        *frame.borrow_mut() = Some(Closure::new(move |now: f64| {
            // Counters whose element left the document are cancelled.
            let detached: Vec<ElementId> = board_c
                .borrow()
                .running()
                .filter(|id| !page_c.element(*id).is_some_and(|el| el.is_connected()))
                .collect();
            for id in detached {
                debug!("count-up {id:?} detached, cancelling");
                board_c.borrow_mut().remove(id);
            }

            let fx = board_c.borrow_mut().tick(now);
            page_c.apply(fx, None);

            let idle = board_c.borrow().is_idle();
            if idle || request_frame(&page_c, &frame_c).is_err() {
                scheduled_c.set(false);
            }
        }));
    }

    let page_c = Rc::clone(page);
    let board_c = Rc::clone(&board);
    let observer = intersection_observer(page, cfg.count_up.threshold, move |reports, observer| {
        let fx = board_c.borrow_mut().on_intersections(&reports, page_c.now());
        page_c.apply(fx, Some(&observer));
        if !board_c.borrow().is_idle() && !scheduled.get() {
            scheduled.set(request_frame(&page_c, &frame).is_ok());
        }
    })?;

    for el in targets {
        let id = page.register(&el);
        let raw = data_attr(&el, "count").unwrap_or_default();
        if board.borrow_mut().watch_attr(id, &raw).is_ok() {
            observer.observe(&el);
        }
    }
    Ok(())
}
