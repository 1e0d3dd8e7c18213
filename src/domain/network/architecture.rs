use std::collections::BTreeSet;

use super::{FiberId, Network};

/// The optical switching architecture of a node, which determines where an
/// incoming or locally added signal propagates to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchingArchitecture {
    /// A wavelength-selective architecture. Signals reach exactly the
    /// requested output fiber and nothing else.
    RouteAndSelect,

    /// A filterless architecture. Incoming light is broadcast to the node's
    /// outgoing fibers, creating waste signal on the fibers that were not
    /// intentionally targeted.
    Filterless,
}

impl SwitchingArchitecture {
    /// True when this architecture can never create wasted spectrum, i.e.
    /// signals only reach the fibers they were switched to.
    pub fn is_never_creating_wasted_spectrum(self) -> bool {
        match self {
            SwitchingArchitecture::RouteAndSelect => true,
            SwitchingArchitecture::Filterless => false,
        }
    }

    /// Fibers reached by a signal added at the origin node of `output` with
    /// `output` as its intended first fiber.
    pub fn out_fibers_if_add_to_output_fiber(self, net: &Network, output: FiberId) -> BTreeSet<FiberId> {
        match self {
            SwitchingArchitecture::RouteAndSelect => {
                let mut res = BTreeSet::new();
                res.insert(output);
                res
            }
            SwitchingArchitecture::Filterless => match net.fiber(output) {
                Some(f) => net.outgoing_fibers(f.origin()),
                None => BTreeSet::new(),
            },
        }
    }

    /// Fibers reached by a signal entering on `input` and expressed towards
    /// `output` at the node joining them.
    pub fn out_fibers_if_express_from_input_to_output_fiber(self, net: &Network, input: FiberId, output: FiberId) -> BTreeSet<FiberId> {
        match self {
            SwitchingArchitecture::RouteAndSelect => {
                let mut res = BTreeSet::new();
                res.insert(output);
                res
            }
            SwitchingArchitecture::Filterless => self.out_fibers_unavoidable_propagation_from_input_fiber(net, input),
        }
    }

    /// Fibers the signal entering on `input` unavoidably continues to at the
    /// destination node of `input`, regardless of any switching decision.
    /// The input's own bidirectional pair is excluded (light does not turn
    /// straight back).
    pub fn out_fibers_unavoidable_propagation_from_input_fiber(self, net: &Network, input: FiberId) -> BTreeSet<FiberId> {
        match self {
            SwitchingArchitecture::RouteAndSelect => BTreeSet::new(),
            SwitchingArchitecture::Filterless => match net.fiber(input) {
                Some(f) => {
                    let mut res = net.outgoing_fibers(f.destination());
                    if let Some(pair) = f.bidirectional_pair() {
                        res.remove(&pair);
                    }
                    res
                }
                None => BTreeSet::new(),
            },
        }
    }
}
