//! Browser implementation of the certificate print surface.
//!
//! A surface is a new `_blank` window. The composed page is written with
//! `document.write`, and readiness is the `load`/`error` event of its single
//! `<img>`, bridged to a oneshot channel so the dispatcher can await it.

use async_trait::async_trait;
use common::certificate::print::{PresentationSurface, PrintError, SurfaceHost};
use futures::channel::oneshot;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, HtmlImageElement, Window};

/// Opens print windows from the current page.
pub struct BrowserWindowHost;

pub struct BrowserWindow {
    window: Window,
}

impl SurfaceHost for BrowserWindowHost {
    type Surface = BrowserWindow;

    fn open_surface(&self) -> Result<BrowserWindow, PrintError> {
        let window = web_sys::window().ok_or(PrintError::SurfaceUnavailable)?;
        match window.open_with_url_and_target("", "_blank") {
            Ok(Some(window)) => Ok(BrowserWindow { window }),
            _ => Err(PrintError::SurfaceUnavailable),
        }
    }
}

impl BrowserWindow {
    fn document(&self) -> Result<HtmlDocument, PrintError> {
        self.window
            .document()
            .and_then(|d| d.dyn_into::<HtmlDocument>().ok())
            .ok_or_else(|| PrintError::Render("print window has no document".to_string()))
    }

    fn image(&self) -> Result<HtmlImageElement, PrintError> {
        self.document()?
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|e| e.dyn_into::<HtmlImageElement>().ok())
            .ok_or(PrintError::ImageLoad)
    }
}

#[async_trait(?Send)]
impl PresentationSurface for BrowserWindow {
    fn render(&mut self, html: &str) -> Result<(), PrintError> {
        let document = self.document()?;
        document
            .open()
            .and_then(|_| document.write_1(html))
            .and_then(|_| document.close())
            .map_err(|e| PrintError::Render(format!("{:?}", e)))
    }

    async fn image_loaded(&mut self) -> Result<(), PrintError> {
        let image = self.image()?;
        if image.complete() {
            return if image.natural_width() > 0 {
                Ok(())
            } else {
                Err(PrintError::ImageLoad)
            };
        }

        let (tx, rx) = oneshot::channel::<bool>();
        let tx = Rc::new(RefCell::new(Some(tx)));
        let signal = |loaded: bool| {
            let tx = tx.clone();
            Closure::<dyn FnMut()>::new(move || {
                if let Some(tx) = tx.borrow_mut().take() {
                    let _ = tx.send(loaded);
                }
            })
        };
        let on_load = signal(true);
        let on_error = signal(false);
        image.set_onload(Some(on_load.as_ref().unchecked_ref()));
        image.set_onerror(Some(on_error.as_ref().unchecked_ref()));

        let loaded = rx.await.unwrap_or(false);

        image.set_onload(None);
        image.set_onerror(None);
        drop((on_load, on_error));

        if loaded {
            Ok(())
        } else {
            Err(PrintError::ImageLoad)
        }
    }

    fn print(&mut self) -> Result<(), PrintError> {
        self.window
            .print()
            .map_err(|e| PrintError::Print(format!("{:?}", e)))
    }

    fn close(&mut self) {
        let _ = self.window.close();
    }
}
