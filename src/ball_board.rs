use stm32f1xx_hal::delay::Delay;
use stm32f1xx_hal::gpio::gpioa::{PA1, PA2, PA5, PA7};
use stm32f1xx_hal::gpio::gpiob::{PB0, PB1, PB2};
use stm32f1xx_hal::gpio::gpioc::PC13;
use stm32f1xx_hal::gpio::{Alternate, Output, PushPull};
use stm32f1xx_hal::pac::{Peripherals, SPI1};
use stm32f1xx_hal::prelude::*;
use stm32f1xx_hal::spi::{Mode, NoMiso, Phase, Polarity, Spi, Spi1NoRemap};

use amiga_ball::ball_controller::BallController;
use amiga_ball::ball_display::St7735;
use amiga_ball::ball_frame::FrameBuffer;
use amiga_ball::ball_leds::RgbLed;

// Panel SPI clock, APB2 / 4
static DISPLAY_SPI_FREQUENCY_HZ: u32 = 18_000_000;

pub type DisplaySpi =
    Spi<SPI1, Spi1NoRemap, (PA5<Alternate<PushPull>>, NoMiso, PA7<Alternate<PushPull>>), u8>;
// Data/command on PB0, reset on PB1, chip select on PB2
pub type Display =
    St7735<DisplaySpi, PB0<Output<PushPull>>, PB2<Output<PushPull>>, PB1<Output<PushPull>>>;
pub type Leds = RgbLed<PC13<Output<PushPull>>, PA1<Output<PushPull>>, PA2<Output<PushPull>>>;

/// Clocks, pins, panel and LEDs. Panics if any of them fails to come up.
pub fn init(
    dp: Peripherals,
    cp: cortex_m::Peripherals,
    frame: &'static mut FrameBuffer,
) -> BallController<'static, Display, Leds> {
    let mut flash = dp.FLASH.constrain();
    let mut rcc = dp.RCC.constrain();

    let clocks = rcc
        .cfgr
        .use_hse(8.mhz())
        .sysclk(72.mhz())
        .hclk(72.mhz())
        .pclk1(36.mhz())
        .pclk2(72.mhz())
        .freeze(&mut flash.acr);

    let mut afio = dp.AFIO.constrain(&mut rcc.apb2);
    let mut gpioa = dp.GPIOA.split(&mut rcc.apb2);
    let mut gpiob = dp.GPIOB.split(&mut rcc.apb2);
    let mut gpioc = dp.GPIOC.split(&mut rcc.apb2);

    let leds = RgbLed::new(
        gpioc.pc13.into_push_pull_output(&mut gpioc.crh),
        gpioa.pa1.into_push_pull_output(&mut gpioa.crl),
        gpioa.pa2.into_push_pull_output(&mut gpioa.crl),
    )
    .unwrap();

    let display_spi = {
        let pins = (
            gpioa.pa5.into_alternate_push_pull(&mut gpioa.crl),
            NoMiso,
            gpioa.pa7.into_alternate_push_pull(&mut gpioa.crl),
        );

        let spi_mode = Mode {
            polarity: Polarity::IdleLow,
            phase: Phase::CaptureOnFirstTransition,
        };

        Spi::spi1(
            dp.SPI1,
            pins,
            &mut afio.mapr,
            spi_mode,
            DISPLAY_SPI_FREQUENCY_HZ.hz(),
            clocks,
            &mut rcc.apb2,
        )
    };

    let mut display = St7735::new(
        display_spi,
        gpiob.pb0.into_push_pull_output(&mut gpiob.crl),
        gpiob.pb2.into_push_pull_output(&mut gpiob.crl),
        gpiob.pb1.into_push_pull_output(&mut gpiob.crl),
    );

    let mut delay = Delay::new(cp.SYST, clocks);
    display.init(&mut delay).unwrap();

    BallController::new(display, leds, frame).unwrap()
}
