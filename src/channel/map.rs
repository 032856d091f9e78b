//---------------------------------------------------------------------------------------------------- use
use crate::{
	channel::ChannelPosition,
	constants::MAX_CHANNELS,
	error::ResamplerError,
	format::StreamSpec,
};
use std::str::FromStr;
use symphonia::core::audio::{Channels,Layout};

//---------------------------------------------------------------------------------------------------- ChannelMap
/// An ordered sequence of [`ChannelPosition`]'s, one per channel.
///
/// ```rust
/// # use henkan::channel::*;
/// let map = ChannelMap::default_for(6).unwrap();
/// assert_eq!(map.to_string(), "front-left,front-right,front-center,lfe,rear-left,rear-right");
///
/// let parsed: ChannelMap = "front-left,front-right".parse().unwrap();
/// assert_eq!(parsed, ChannelMap::stereo());
/// ```
#[derive(Clone,Debug,PartialEq,Eq,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ChannelMap(Vec<ChannelPosition>);

impl ChannelMap {
	#[inline]
	#[must_use]
	/// Create a [`ChannelMap`] from positions.
	///
	/// This does not validate the input, see [`Self::validate`].
	pub fn new(positions: impl Into<Vec<ChannelPosition>>) -> Self {
		Self(positions.into())
	}

	#[must_use]
	/// A single [`ChannelPosition::Mono`] channel.
	pub fn mono() -> Self {
		Self(vec![ChannelPosition::Mono])
	}

	#[must_use]
	/// [`ChannelPosition::FrontLeft`] and [`ChannelPosition::FrontRight`].
	pub fn stereo() -> Self {
		Self(vec![ChannelPosition::FrontLeft, ChannelPosition::FrontRight])
	}

	#[must_use]
	/// The conventional layout for `channels` channels.
	///
	/// | Channels | Layout |
	/// |----------|--------|
	/// | 1 | mono
	/// | 2 | stereo
	/// | 3 | 3.0
	/// | 4 | quad
	/// | 5 | 5.0
	/// | 6 | 5.1
	/// | 7 | 6.1
	/// | 8 | 7.1
	/// | 9..=32 | 7.1 followed by auxiliary channels
	///
	/// Returns `None` if `channels` is `0` or greater than [`MAX_CHANNELS`].
	pub fn default_for(channels: u8) -> Option<Self> {
		use ChannelPosition as P;

		let channels = channels as usize;
		if channels == 0 || channels > MAX_CHANNELS {
			return None;
		}

		let base: &[ChannelPosition] = match channels {
			1 => &[P::Mono],
			2 => &[P::FrontLeft, P::FrontRight],
			3 => &[P::FrontLeft, P::FrontRight, P::FrontCenter],
			4 => &[P::FrontLeft, P::FrontRight, P::RearLeft, P::RearRight],
			5 => &[P::FrontLeft, P::FrontRight, P::FrontCenter, P::RearLeft, P::RearRight],
			6 => &[P::FrontLeft, P::FrontRight, P::FrontCenter, P::Lfe, P::RearLeft, P::RearRight],
			7 => &[P::FrontLeft, P::FrontRight, P::FrontCenter, P::Lfe, P::RearCenter, P::SideLeft, P::SideRight],
			_ => &[P::FrontLeft, P::FrontRight, P::FrontCenter, P::Lfe, P::RearLeft, P::RearRight, P::SideLeft, P::SideRight],
		};

		let mut vec = Vec::with_capacity(channels);
		vec.extend_from_slice(base);
		// `channels <= MAX_CHANNELS` so this always fits in a `u8`.
		vec.extend((0..channels - base.len()).map(|n| P::Aux(n as u8)));
		Some(Self(vec))
	}

	#[inline]
	#[must_use]
	/// How many channels are in this map?
	pub fn len(&self) -> usize {
		self.0.len()
	}

	#[inline]
	#[must_use]
	/// Is this map empty?
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	#[inline]
	#[must_use]
	/// The positions in channel order.
	pub fn positions(&self) -> &[ChannelPosition] {
		&self.0
	}

	#[inline]
	#[must_use]
	/// Does this map contain `position`?
	pub fn contains(&self, position: ChannelPosition) -> bool {
		self.0.contains(&position)
	}

	#[inline]
	#[must_use]
	/// Does this map contain an LFE channel?
	pub fn has_lfe(&self) -> bool {
		self.0.iter().any(|p| p.is_lfe())
	}

	/// Check that this map fits `spec`.
	///
	/// # Errors
	/// [`ResamplerError::InvalidFormat`] if the map length does
	/// not equal the channel count, or if an auxiliary channel
	/// index is out of range.
	pub fn validate(&self, spec: &StreamSpec) -> Result<(), ResamplerError> {
		if self.len() != spec.channel_count() {
			return Err(ResamplerError::InvalidFormat("channel map length does not match channel count"));
		}

		if self.0.iter().any(|p| matches!(p, ChannelPosition::Aux(n) if *n as usize >= MAX_CHANNELS)) {
			return Err(ResamplerError::InvalidFormat("auxiliary channel index out of range"));
		}

		Ok(())
	}
}

impl std::ops::Index<usize> for ChannelMap {
	type Output = ChannelPosition;
	#[inline]
	fn index(&self, index: usize) -> &Self::Output {
		&self.0[index]
	}
}

impl std::fmt::Display for ChannelMap {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		for (i, p) in self.0.iter().enumerate() {
			if i != 0 {
				f.write_str(",")?;
			}
			write!(f, "{p}")?;
		}
		Ok(())
	}
}

impl FromStr for ChannelMap {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.split(',')
			.map(|p| p.trim().parse::<ChannelPosition>())
			.collect::<Result<Vec<_>, _>>()
			.map(Self)
	}
}

//---------------------------------------------------------------------------------------------------- Symphonia
impl From<Channels> for ChannelMap {
	/// Map a `symphonia` channel bit set.
	///
	/// Channels are ordered by bit, which for the first
	/// 18 bits is the WAVEFORMATEXTENSIBLE speaker order.
	///
	/// A lone [`Channels::FRONT_LEFT`] is [`ChannelPosition::Mono`].
	fn from(channels: Channels) -> Self {
		use ChannelPosition as P;

		if channels == Channels::FRONT_LEFT {
			return Self::mono();
		}

		let mut aux = 0_u8;
		let vec = channels
			.iter()
			.take(MAX_CHANNELS)
			.map(|c| {
				let known = [
					(Channels::FRONT_LEFT,         P::FrontLeft),
					(Channels::FRONT_RIGHT,        P::FrontRight),
					(Channels::FRONT_CENTRE,       P::FrontCenter),
					(Channels::LFE1,               P::Lfe),
					(Channels::REAR_LEFT,          P::RearLeft),
					(Channels::REAR_RIGHT,         P::RearRight),
					(Channels::FRONT_LEFT_CENTRE,  P::FrontLeftOfCenter),
					(Channels::FRONT_RIGHT_CENTRE, P::FrontRightOfCenter),
					(Channels::REAR_CENTRE,        P::RearCenter),
					(Channels::SIDE_LEFT,          P::SideLeft),
					(Channels::SIDE_RIGHT,         P::SideRight),
					(Channels::TOP_CENTRE,         P::TopCenter),
					(Channels::TOP_FRONT_LEFT,     P::TopFrontLeft),
					(Channels::TOP_FRONT_CENTRE,   P::TopFrontCenter),
					(Channels::TOP_FRONT_RIGHT,    P::TopFrontRight),
					(Channels::TOP_REAR_LEFT,      P::TopRearLeft),
					(Channels::TOP_REAR_CENTRE,    P::TopRearCenter),
					(Channels::TOP_REAR_RIGHT,     P::TopRearRight),
				];

				known
					.iter()
					.find(|(bit, _)| *bit == c)
					.map(|(_, p)| *p)
					.unwrap_or_else(|| {
						let p = P::Aux(aux);
						aux += 1;
						p
					})
			})
			.collect();

		Self(vec)
	}
}

impl From<Layout> for ChannelMap {
	fn from(layout: Layout) -> Self {
		Self::from(layout.into_channels())
	}
}
