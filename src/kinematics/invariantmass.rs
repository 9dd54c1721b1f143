use std::f64::consts::PI;

/// Single-particle kinematics in collider coordinates: transverse momentum,
/// pseudorapidity, azimuth. Masses are neglected throughout.
pub struct LeptonKinematics {
    p_t: f64,
    eta: f64,
    phi: f64
}

impl LeptonKinematics {
    pub fn new(p_t: f64, eta: f64, phi: f64) -> LeptonKinematics {
        LeptonKinematics { p_t, eta, phi }
    }

    pub fn p_t(&self) -> f64 {
        self.p_t
    }

    pub fn eta(&self) -> f64 {
        self.eta
    }

    pub fn phi(&self) -> f64 {
        self.phi
    }

    // theta = 2 atan(e^{-eta})
    pub fn polar_angle(&self) -> f64 {
        2.0 * (-self.eta).exp().atan()
    }

    pub fn momentum(&self) -> f64 {
        self.p_t / self.polar_angle().sin()
    }
}

/// Azimuthal opening angle, folded into [0, pi].
pub fn opening_angle(phi_1: f64, phi_2: f64) -> f64 {
    let delta = (phi_1 - phi_2).abs();
    if delta > PI {
        2.0 * PI - delta
    } else {
        delta
    }
}

/// Invariant mass of a massless pair: m = sqrt(2 p1 p2 (1 - cos alpha)).
pub fn invariant_mass(lepton_1: &LeptonKinematics, lepton_2: &LeptonKinematics) -> f64 {
    let alpha = opening_angle(lepton_1.phi, lepton_2.phi);
    (2.0 * lepton_1.momentum() * lepton_2.momentum() * (1.0 - alpha.cos())).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn central_lepton_momentum_equals_transverse_momentum() {
        // eta = 0 puts the track at theta = pi/2
        let lepton = LeptonKinematics::new(45.0, 0.0, 0.0);
        assert!((lepton.polar_angle() - PI / 2.0).abs() < 1e-12);
        assert!((lepton.momentum() - 45.0).abs() < 1e-9);
    }

    #[test]
    fn forward_lepton_momentum_exceeds_transverse_momentum() {
        let lepton = LeptonKinematics::new(36.802, 1.93236, -1.37226);
        assert!(lepton.polar_angle() < PI / 2.0);
        assert!(lepton.momentum() > lepton.p_t());
    }

    #[test]
    fn opening_angle_folds_past_pi() {
        let alpha = opening_angle(3.0, -3.0);
        assert!((alpha - (2.0 * PI - 6.0)).abs() < 1e-12);
        let beta = opening_angle(1.74583, -1.37226);
        assert!((beta - 3.11809).abs() < 1e-12);
    }

    #[test]
    fn back_to_back_pair_mass_is_twice_the_momentum() {
        let lepton_1 = LeptonKinematics::new(45.0, 0.0, 0.0);
        let lepton_2 = LeptonKinematics::new(45.0, 0.0, PI);
        let mass = invariant_mass(&lepton_1, &lepton_2);
        assert!((mass - 90.0).abs() < 1e-9);
    }

    #[test]
    fn collinear_pair_is_massless() {
        let lepton_1 = LeptonKinematics::new(30.0, 0.0, 1.0);
        let lepton_2 = LeptonKinematics::new(50.0, 0.0, 1.0);
        let mass = invariant_mass(&lepton_1, &lepton_2);
        assert!(mass.abs() < 1e-9);
    }
}
