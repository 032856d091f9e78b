//---------------------------------------------------------------------------------------------------- use
use std::str::FromStr;

//---------------------------------------------------------------------------------------------------- ChannelPosition
/// The logical role of a single channel.
///
/// Mixing matrices are built from these tags, not from the physical channel order.
///
/// ```rust
/// # use henkan::channel::*;
/// assert_eq!("front-left".parse::<ChannelPosition>().unwrap(), ChannelPosition::FrontLeft);
/// assert_eq!("aux7".parse::<ChannelPosition>().unwrap(), ChannelPosition::Aux(7));
/// assert_eq!(ChannelPosition::Lfe.to_string(), "lfe");
/// ```
#[derive(Copy,Clone,Debug,PartialEq,PartialOrd,Eq,Ord,Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum ChannelPosition {
	/// Single channel stream.
	Mono,
	/// Front left.
	FrontLeft,
	/// Front right.
	FrontRight,
	/// Front center.
	FrontCenter,
	/// Rear center.
	RearCenter,
	/// Rear left.
	RearLeft,
	/// Rear right.
	RearRight,
	/// Low frequency effects (subwoofer).
	Lfe,
	/// Front left of center.
	FrontLeftOfCenter,
	/// Front right of center.
	FrontRightOfCenter,
	/// Side left.
	SideLeft,
	/// Side right.
	SideRight,
	/// An auxiliary channel without a position, `0..32`.
	Aux(u8),
	/// Top center.
	TopCenter,
	/// Top front left.
	TopFrontLeft,
	/// Top front right.
	TopFrontRight,
	/// Top front center.
	TopFrontCenter,
	/// Top rear left.
	TopRearLeft,
	/// Top rear right.
	TopRearRight,
	/// Top rear center.
	TopRearCenter,
}

/// Front/rear/side classification of a [`ChannelPosition`].
#[derive(Copy,Clone,Debug,PartialEq,Eq,Hash)]
pub enum Placement {
	/// Somewhere in front of the listener.
	Front,
	/// Somewhere behind the listener.
	Rear,
	/// To the side of (or above) the listener.
	Side,
	/// Mono, LFE, auxiliary channels.
	Other,
}

impl ChannelPosition {
	#[inline]
	#[must_use]
	/// Is this channel on the left side?
	pub const fn is_left(self) -> bool {
		matches!(
			self,
			Self::FrontLeft | Self::RearLeft | Self::FrontLeftOfCenter |
			Self::SideLeft | Self::TopFrontLeft | Self::TopRearLeft
		)
	}

	#[inline]
	#[must_use]
	/// Is this channel on the right side?
	pub const fn is_right(self) -> bool {
		matches!(
			self,
			Self::FrontRight | Self::RearRight | Self::FrontRightOfCenter |
			Self::SideRight | Self::TopFrontRight | Self::TopRearRight
		)
	}

	#[inline]
	#[must_use]
	/// Is this channel in the center?
	pub const fn is_center(self) -> bool {
		matches!(
			self,
			Self::FrontCenter | Self::RearCenter | Self::TopCenter |
			Self::TopFrontCenter | Self::TopRearCenter
		)
	}

	#[inline]
	#[must_use]
	/// Is this the LFE channel?
	pub const fn is_lfe(self) -> bool {
		matches!(self, Self::Lfe)
	}

	#[must_use]
	/// Classify as front, rear or side.
	pub const fn placement(self) -> Placement {
		match self {
			Self::FrontLeft | Self::FrontRight | Self::FrontCenter |
			Self::TopFrontLeft | Self::TopFrontRight | Self::TopFrontCenter |
			Self::FrontLeftOfCenter | Self::FrontRightOfCenter => Placement::Front,

			Self::RearLeft | Self::RearRight | Self::RearCenter |
			Self::TopRearLeft | Self::TopRearRight | Self::TopRearCenter => Placement::Rear,

			Self::SideLeft | Self::SideRight | Self::TopCenter => Placement::Side,

			Self::Mono | Self::Lfe | Self::Aux(_) => Placement::Other,
		}
	}

	#[must_use]
	/// Is `self` the rear/side counterpart of `other`?
	///
	/// 5.1 streams are commonly tagged with either rear or side
	/// surrounds, these are treated as the same speaker.
	pub const fn is_surround_alias(self, other: Self) -> bool {
		matches!(
			(self, other),
			(Self::RearLeft, Self::SideLeft) | (Self::SideLeft, Self::RearLeft) |
			(Self::RearRight, Self::SideRight) | (Self::SideRight, Self::RearRight)
		)
	}

	#[must_use]
	/// The short name of this position.
	///
	/// [`ChannelPosition::Aux`] has no static name, see [`std::fmt::Display`].
	pub const fn name(self) -> Option<&'static str> {
		Some(match self {
			Self::Mono               => "mono",
			Self::FrontLeft          => "front-left",
			Self::FrontRight         => "front-right",
			Self::FrontCenter        => "front-center",
			Self::RearCenter         => "rear-center",
			Self::RearLeft           => "rear-left",
			Self::RearRight          => "rear-right",
			Self::Lfe                => "lfe",
			Self::FrontLeftOfCenter  => "front-left-of-center",
			Self::FrontRightOfCenter => "front-right-of-center",
			Self::SideLeft           => "side-left",
			Self::SideRight          => "side-right",
			Self::TopCenter          => "top-center",
			Self::TopFrontLeft       => "top-front-left",
			Self::TopFrontRight      => "top-front-right",
			Self::TopFrontCenter     => "top-front-center",
			Self::TopRearLeft        => "top-rear-left",
			Self::TopRearRight       => "top-rear-right",
			Self::TopRearCenter      => "top-rear-center",
			Self::Aux(_)             => return None,
		})
	}

	/// Every named position, in declaration order.
	pub(crate) const NAMED: [Self; 19] = [
		Self::Mono, Self::FrontLeft, Self::FrontRight, Self::FrontCenter,
		Self::RearCenter, Self::RearLeft, Self::RearRight, Self::Lfe,
		Self::FrontLeftOfCenter, Self::FrontRightOfCenter, Self::SideLeft,
		Self::SideRight, Self::TopCenter, Self::TopFrontLeft, Self::TopFrontRight,
		Self::TopFrontCenter, Self::TopRearLeft, Self::TopRearRight, Self::TopRearCenter,
	];
}

impl std::fmt::Display for ChannelPosition {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Aux(n) => write!(f, "aux{n}"),
			p => f.write_str(p.name().unwrap_or_default()),
		}
	}
}

impl FromStr for ChannelPosition {
	type Err = ();

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Some(n) = s.strip_prefix("aux") {
			return match n.parse::<u8>() {
				Ok(n) if (n as usize) < crate::constants::MAX_CHANNELS => Ok(Self::Aux(n)),
				_ => Err(()),
			};
		}

		Self::NAMED
			.into_iter()
			.find(|p| p.name() == Some(s))
			.ok_or(())
	}
}

//---------------------------------------------------------------------------------------------------- Tests
#[cfg(test)]
mod tests {
	use super::*;
	use pretty_assertions::assert_eq;

	#[test]
	fn sides_are_exclusive() {
		for p in ChannelPosition::NAMED {
			let sides = [p.is_left(), p.is_right(), p.is_center(), p.is_lfe()];
			assert!(sides.iter().filter(|b| **b).count() <= 1, "{p}");
		}
	}

	#[test]
	fn placement() {
		assert_eq!(ChannelPosition::FrontLeftOfCenter.placement(), Placement::Front);
		assert_eq!(ChannelPosition::TopRearCenter.placement(), Placement::Rear);
		assert_eq!(ChannelPosition::TopCenter.placement(), Placement::Side);
		assert_eq!(ChannelPosition::Lfe.placement(), Placement::Other);
		assert_eq!(ChannelPosition::Aux(3).placement(), Placement::Other);
	}

	#[test]
	fn surround_alias() {
		use ChannelPosition as P;
		assert!(P::RearLeft.is_surround_alias(P::SideLeft));
		assert!(P::SideRight.is_surround_alias(P::RearRight));
		assert!(!P::RearLeft.is_surround_alias(P::SideRight));
		assert!(!P::FrontLeft.is_surround_alias(P::FrontLeft));
	}

	#[test]
	fn names_roundtrip() {
		for p in ChannelPosition::NAMED {
			assert_eq!(p.to_string().parse::<ChannelPosition>(), Ok(p));
		}
		assert_eq!("aux31".parse::<ChannelPosition>(), Ok(ChannelPosition::Aux(31)));
		assert_eq!("aux32".parse::<ChannelPosition>(), Err(()));
		assert_eq!("middle".parse::<ChannelPosition>(), Err(()));
	}
}
