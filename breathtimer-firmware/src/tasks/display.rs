//! Display task
//!
//! Redraws the OLED whenever the session task updates the shared screen.

use defmt::*;
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;
use embassy_time::Timer;

use breathtimer_display::{DisplayBackend, GraphicsBackend};

use crate::channels::{SCREEN_BUFFER, SCREEN_UPDATE};
use crate::sh1106::Sh1106;

/// The watch-face panel
pub type Panel = Sh1106<I2c<'static, I2C0, Async>>;

/// Delay before retrying a failed panel init
const INIT_RETRY_MS: u64 = 500;

/// Display task - renders the screen buffer to the OLED
#[embassy_executor::task]
pub async fn display_task(panel: Panel) {
    info!("Display task started");

    let mut backend = GraphicsBackend::new(panel);
    while let Err(e) = backend.target_mut().init().await {
        error!("Failed to initialize display: {:?}", e);
        Timer::after_millis(INIT_RETRY_MS).await;
    }
    info!("Display initialized");

    // Panel RAM is random after power-up; start blank and draw every row
    if let Err(e) = backend.clear() {
        warn!("Display clear failed: {:?}", e);
    }
    SCREEN_BUFFER.lock(|cell| cell.borrow_mut().invalidate());

    loop {
        SCREEN_UPDATE.wait().await;

        // Rasterize outside the critical section
        let mut frame = SCREEN_BUFFER.lock(|cell| cell.borrow_mut().take_frame());
        match frame.render(&mut backend) {
            Ok(0) => continue,
            Ok(rows) => trace!("Redrew {} rows", rows),
            Err(e) => {
                warn!("Render failed: {:?}", e);
                SCREEN_BUFFER.lock(|cell| cell.borrow_mut().invalidate());
                continue;
            }
        }

        if let Err(e) = backend.target_mut().flush().await {
            warn!("Display flush failed: {:?}", e);
            // Panel state is unknown; redraw everything next time
            SCREEN_BUFFER.lock(|cell| cell.borrow_mut().invalidate());
        }
    }
}

