// src/controllers/osc.rs
// OSC Controller

use nannou_osc as osc;
use std::error::Error;

#[derive(Debug, Clone, PartialEq)]
pub enum OscCommand {
    Turn { degrees: f32 },
    Move { length: f32 },
    SetPos { x: f32, y: f32 },
    SetBearing { degrees: f32 },
    Reset,
    RunScript { name: String },
}

pub struct OscController {
    command_queue: Vec<OscCommand>,
    receiver: osc::Receiver,
}

impl OscController {
    pub fn new(port: u16) -> Result<Self, Box<dyn Error>> {
        let receiver = osc::receiver(port)?;

        Ok(Self {
            command_queue: Vec::new(),
            receiver,
        })
    }

    pub fn process_messages(&mut self) {
        for (packet, _addr) in self.receiver.try_iter() {
            for message in packet.into_msgs() {
                match message.addr.as_str() {
                    "/turtle/turn" => {
                        if let [osc::Type::Float(degrees)] = &message.args[..] {
                            self.command_queue.push(OscCommand::Turn { degrees: *degrees });
                        }
                    }
                    "/turtle/move" => {
                        if let [osc::Type::Float(length)] = &message.args[..] {
                            self.command_queue.push(OscCommand::Move { length: *length });
                        }
                    }
                    "/turtle/setpos" => {
                        if let [osc::Type::Float(x), osc::Type::Float(y)] = &message.args[..] {
                            self.command_queue.push(OscCommand::SetPos { x: *x, y: *y });
                        }
                    }
                    "/turtle/setbearing" => {
                        if let [osc::Type::Float(degrees)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::SetBearing { degrees: *degrees });
                        }
                    }
                    "/turtle/reset" => {
                        self.command_queue.push(OscCommand::Reset);
                    }
                    "/turtle/script" => {
                        if let [osc::Type::String(name)] = &message.args[..] {
                            self.command_queue
                                .push(OscCommand::RunScript { name: name.clone() });
                        }
                    }
                    _ => println!("Unknown OSC address pattern: {}", message.addr),
                };
            }
        }
    }

    pub fn take_commands(&mut self) -> Vec<OscCommand> {
        std::mem::take(&mut self.command_queue)
    }
}

pub struct OscSender {
    sender: osc::Sender,
    target_addr: String,
    target_port: u16,
}

impl OscSender {
    pub fn new(target_port: u16) -> Result<Self, Box<dyn Error>> {
        let target_addr = "127.0.0.1".to_string();
        let sender = osc::sender()?;

        Ok(Self {
            sender,
            target_addr,
            target_port,
        })
    }

    pub fn send_turn(&self, degrees: f32) {
        let addr = "/turtle/turn".to_string();
        let args = vec![osc::Type::Float(degrees)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_move(&self, length: f32) {
        let addr = "/turtle/move".to_string();
        let args = vec![osc::Type::Float(length)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_set_pos(&self, x: f32, y: f32) {
        let addr = "/turtle/setpos".to_string();
        let args = vec![osc::Type::Float(x), osc::Type::Float(y)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_set_bearing(&self, degrees: f32) {
        let addr = "/turtle/setbearing".to_string();
        let args = vec![osc::Type::Float(degrees)];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_reset(&self) {
        let addr = "/turtle/reset".to_string();
        let args: Vec<osc::Type> = Vec::new();
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }

    pub fn send_script(&self, name: &str) {
        let addr = "/turtle/script".to_string();
        let args = vec![osc::Type::String(name.to_string())];
        self.sender
            .send((addr, args), (self.target_addr.as_str(), self.target_port))
            .ok();
    }
}
