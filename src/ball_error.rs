/// Failure of one of the collaborators driven by the frame loop.
#[derive(Debug, PartialEq, Eq)]
pub enum BallError<DisplayE, LedE> {
    Display(DisplayE),
    Led(LedE),
}
