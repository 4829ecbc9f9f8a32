//! Hands a composed certificate to the host's print facility.
//!
//! The dispatcher only knows two seams:
//! - [`SurfaceHost`] opens a fresh [`PresentationSurface`] (a browser window in
//!   the frontend, a scripted fake in tests).
//! - [`PresentationSurface::image_loaded`] is the document-ready future. It
//!   resolves once, after the template image finished loading or failed to.
//!
//! Printing never starts before that future resolves successfully, and the
//! candidate is only marked printed after the print call returned.

use async_trait::async_trait;
use thiserror::Error;

use crate::certificate::compositor::CertificateDocument;
use crate::model::candidate::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrintError {
    #[error("Unable to open print window. Please check your popup blocker settings.")]
    SurfaceUnavailable,
    #[error("Unable to write the certificate into the print window: {0}")]
    Render(String),
    #[error("The certificate template image could not be loaded")]
    ImageLoad,
    #[error("Printing failed: {0}")]
    Print(String),
}

#[async_trait(?Send)]
pub trait PresentationSurface {
    /// Replaces the surface content with `html`.
    fn render(&mut self, html: &str) -> Result<(), PrintError>;

    /// Resolves when the embedded image reports load, or fails with
    /// [`PrintError::ImageLoad`].
    async fn image_loaded(&mut self) -> Result<(), PrintError>;

    /// Invokes the host print dialog; returns once control comes back.
    fn print(&mut self) -> Result<(), PrintError>;

    fn close(&mut self);
}

pub trait SurfaceHost {
    type Surface: PresentationSurface;

    /// Fails with [`PrintError::SurfaceUnavailable`] when the host refuses a new
    /// surface (e.g. popup blocking).
    fn open_surface(&self) -> Result<Self::Surface, PrintError>;
}

/// Renders `document`, prints it once its image is ready, and marks `candidate`
/// as printed.
///
/// On any error the surface (if opened) is closed and `candidate` is left as is.
pub async fn dispatch<H: SurfaceHost>(
    host: &H,
    document: &CertificateDocument,
    candidate: &mut Candidate,
) -> Result<(), PrintError> {
    let mut surface = host.open_surface()?;

    let printed = render_and_print(&mut surface, document).await;
    surface.close();
    printed?;

    candidate.mark_printed();
    Ok(())
}

async fn render_and_print<S: PresentationSurface>(
    surface: &mut S,
    document: &CertificateDocument,
) -> Result<(), PrintError> {
    surface.render(&document.to_html())?;
    surface.image_loaded().await?;
    surface.print()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::certificate::compositor::compose;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Opened,
        Rendered(String),
        ImageLoaded,
        Printed,
        Closed,
    }

    type Log = Rc<RefCell<Vec<Event>>>;

    #[derive(Clone, Copy)]
    enum Script {
        Normal,
        BlockPopup,
        BrokenImage,
        FailPrint,
    }

    struct FakeHost {
        log: Log,
        script: Script,
        image_signal: RefCell<Option<oneshot::Receiver<bool>>>,
    }

    impl FakeHost {
        fn new(script: Script) -> Self {
            Self {
                log: Rc::default(),
                script,
                image_signal: RefCell::new(None),
            }
        }

        fn events(&self) -> Vec<Event> {
            self.log.borrow().clone()
        }
    }

    struct FakeSurface {
        log: Log,
        script: Script,
        image_signal: Option<oneshot::Receiver<bool>>,
    }

    impl SurfaceHost for FakeHost {
        type Surface = FakeSurface;

        fn open_surface(&self) -> Result<FakeSurface, PrintError> {
            if let Script::BlockPopup = self.script {
                return Err(PrintError::SurfaceUnavailable);
            }
            self.log.borrow_mut().push(Event::Opened);
            Ok(FakeSurface {
                log: self.log.clone(),
                script: self.script,
                image_signal: self.image_signal.borrow_mut().take(),
            })
        }
    }

    #[async_trait(?Send)]
    impl PresentationSurface for FakeSurface {
        fn render(&mut self, html: &str) -> Result<(), PrintError> {
            self.log.borrow_mut().push(Event::Rendered(html.to_string()));
            Ok(())
        }

        async fn image_loaded(&mut self) -> Result<(), PrintError> {
            let loaded = match self.image_signal.take() {
                Some(signal) => signal.await.unwrap_or(false),
                None => !matches!(self.script, Script::BrokenImage),
            };
            if !loaded {
                return Err(PrintError::ImageLoad);
            }
            self.log.borrow_mut().push(Event::ImageLoaded);
            Ok(())
        }

        fn print(&mut self) -> Result<(), PrintError> {
            if let Script::FailPrint = self.script {
                return Err(PrintError::Print("printer offline".to_string()));
            }
            self.log.borrow_mut().push(Event::Printed);
            Ok(())
        }

        fn close(&mut self) {
            self.log.borrow_mut().push(Event::Closed);
        }
    }

    fn alice() -> Candidate {
        Candidate {
            id: 1,
            name: "Alice".to_string(),
            score: 87.5,
            date_naissance: "2000-01-01".to_string(),
            is_printed: false,
        }
    }

    fn document() -> CertificateDocument {
        compose(&alice(), "http://localhost:8080/certificate-templates/gold.png", "10/19/2026")
    }

    #[test]
    fn prints_after_image_load_then_closes_and_marks_printed() {
        let host = FakeHost::new(Script::Normal);
        let mut candidate = alice();

        block_on(dispatch(&host, &document(), &mut candidate)).unwrap();

        assert!(candidate.is_printed);
        assert_eq!(
            host.events(),
            vec![
                Event::Opened,
                Event::Rendered(document().to_html()),
                Event::ImageLoaded,
                Event::Printed,
                Event::Closed,
            ]
        );
    }

    #[test]
    fn waits_for_the_image_signal_before_printing() {
        let (loaded_tx, loaded_rx) = oneshot::channel();
        let host = FakeHost::new(Script::Normal);
        *host.image_signal.borrow_mut() = Some(loaded_rx);
        let candidate = RefCell::new(alice());
        let doc = document();

        let print = async {
            let mut c = candidate.borrow().clone();
            let result = dispatch(&host, &doc, &mut c).await;
            *candidate.borrow_mut() = c;
            result
        };
        let signal = async {
            // The dispatcher is parked on the image future at this point.
            assert!(!host.events().contains(&Event::Printed));
            assert!(!candidate.borrow().is_printed);
            loaded_tx.send(true).unwrap();
        };

        let (result, ()) = block_on(join(print, signal));
        result.unwrap();
        assert!(candidate.borrow().is_printed);
    }

    #[test]
    fn blocked_popup_leaves_candidate_untouched() {
        let host = FakeHost::new(Script::BlockPopup);
        let mut candidate = alice();

        let result = block_on(dispatch(&host, &document(), &mut candidate));

        assert_eq!(result, Err(PrintError::SurfaceUnavailable));
        assert!(!candidate.is_printed);
        assert!(host.events().is_empty());
    }

    #[test]
    fn broken_image_closes_surface_without_printing() {
        let host = FakeHost::new(Script::BrokenImage);
        let mut candidate = alice();

        let result = block_on(dispatch(&host, &document(), &mut candidate));

        assert_eq!(result, Err(PrintError::ImageLoad));
        assert!(!candidate.is_printed);
        let events = host.events();
        assert!(!events.contains(&Event::Printed));
        assert_eq!(events.last(), Some(&Event::Closed));
    }

    #[test]
    fn print_failure_is_reported_and_surface_closed() {
        let host = FakeHost::new(Script::FailPrint);
        let mut candidate = alice();

        let result = block_on(dispatch(&host, &document(), &mut candidate));

        assert!(matches!(result, Err(PrintError::Print(_))));
        assert!(!candidate.is_printed);
        assert_eq!(host.events().last(), Some(&Event::Closed));
    }
}
