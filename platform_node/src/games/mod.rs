//! Platform games: the crash game engine and the lottery schedule.

pub mod crash;
pub mod lottery;
