#![no_std]
#![no_main]

use panic_reset as _;

use cortex_m_rt::entry;
use stm32f1xx_hal::pac::Peripherals;

use amiga_ball::ball_frame::FrameBuffer;

mod ball_board;
#[cfg(feature = "semihosting")]
mod ball_log;

// Too large for the stack of the entry function
static mut FRAME_BUFFER: FrameBuffer = FrameBuffer::new();

#[entry]
fn main() -> ! {
    #[cfg(feature = "semihosting")]
    ball_log::init();

    let dp = Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();
    let frame = unsafe { &mut FRAME_BUFFER };
    let mut controller = ball_board::init(dp, cp, frame);

    let error = controller.run();
    panic!("frame loop stopped: {:?}", error);
}
