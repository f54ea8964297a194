use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use educe::Educe;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Educe)]
#[educe(Default)]
pub struct Server {
    #[educe(Default(expression = IpAddr::V4(Ipv4Addr::UNSPECIFIED)))]
    pub host: IpAddr,
    #[educe(Default(expression = 8080))]
    pub port: u16,
}

impl Server {
    pub fn to_socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
